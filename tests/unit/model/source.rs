use super::*;

#[test]
fn image_source_validate_checks_buffer_length() {
    let good = ImageSource {
        rgba8: vec![0; 2 * 3 * 4],
        width: 2,
        height: 3,
    };
    good.validate().unwrap();

    let short = ImageSource {
        rgba8: vec![0; 7],
        width: 2,
        height: 3,
    };
    assert!(matches!(
        short.validate(),
        Err(crate::PenumbraError::SourceUnavailable(_))
    ));
}

#[test]
fn zero_sized_image_is_unavailable() {
    let empty = ImageSource {
        rgba8: vec![],
        width: 0,
        height: 4,
    };
    assert!(matches!(
        empty.validate(),
        Err(crate::PenumbraError::SourceUnavailable(_))
    ));
}

#[test]
fn procedural_defaults_describe_standard_blinds() {
    let p = ProceduralParams::default();
    assert_eq!(p.angle, AngleMode::Fixed { degrees: -35.0 });
    assert_eq!(p.slat_width_px, 5.0);
    assert_eq!(p.slat_spacing_px, 50.0);
    assert!(p.frame.is_some());
}
