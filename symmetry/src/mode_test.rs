use super::*;

// =============================================================
// RadialSegments
// =============================================================

#[test]
fn radial_counts_are_the_supported_set() {
    let counts: Vec<usize> = RadialSegments::ALL.iter().map(|s| s.count()).collect();
    assert_eq!(counts, vec![4, 6, 8, 12, 16]);
}

#[test]
fn radial_from_count_rejects_unsupported() {
    assert_eq!(RadialSegments::from_count(12), Some(RadialSegments::Twelve));
    assert_eq!(RadialSegments::from_count(5), None);
    assert_eq!(RadialSegments::from_count(0), None);
}

// =============================================================
// SymmetryMode
// =============================================================

#[test]
fn default_mode_is_radial_eight() {
    assert_eq!(SymmetryMode::default(), SymmetryMode::Radial(RadialSegments::Eight));
}

#[test]
fn nominal_counts_per_mode() {
    let cases = [
        (SymmetryMode::None, 1),
        (SymmetryMode::Horizontal, 2),
        (SymmetryMode::Vertical, 2),
        (SymmetryMode::Diagonal, 4),
        (SymmetryMode::Radial(RadialSegments::Four), 4),
        (SymmetryMode::Radial(RadialSegments::Six), 6),
        (SymmetryMode::Radial(RadialSegments::Eight), 8),
        (SymmetryMode::Radial(RadialSegments::Twelve), 12),
        (SymmetryMode::Radial(RadialSegments::Sixteen), 16),
    ];
    for (mode, expected) in cases {
        assert_eq!(mode.nominal_count(), expected, "{mode}");
    }
}

#[test]
fn only_none_is_inactive() {
    for mode in SymmetryMode::ALL {
        assert_eq!(mode.is_active(), mode != SymmetryMode::None);
    }
}

#[test]
fn names_parse_back_to_the_same_mode() {
    for mode in SymmetryMode::ALL {
        let parsed: SymmetryMode = mode.as_str().parse().unwrap();
        assert_eq!(parsed, mode);
        assert_eq!(mode.to_string(), mode.as_str());
    }
}

#[test]
fn parse_rejects_unknown_names() {
    for raw in ["", "radial-5", "Radial-8", "mirror", "radial"] {
        let err = raw.parse::<SymmetryMode>().unwrap_err();
        assert_eq!(err, SymmetryError::InvalidMode(raw.to_owned()));
    }
}

#[test]
fn serde_uses_kebab_names() {
    let json = serde_json::to_string(&SymmetryMode::Radial(RadialSegments::Twelve)).unwrap();
    assert_eq!(json, "\"radial-12\"");
    let back: SymmetryMode = serde_json::from_str("\"diagonal\"").unwrap();
    assert_eq!(back, SymmetryMode::Diagonal);
}

#[test]
fn serde_rejects_unknown_name() {
    let err = serde_json::from_str::<SymmetryMode>("\"spiral\"").unwrap_err();
    assert!(err.to_string().contains("invalid symmetry mode"));
}
