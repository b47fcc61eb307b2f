use super::*;

#[test]
fn identity_round_trips() {
    assert!(Transform::IDENTITY.is_identity());
    assert!(Transform::default().is_identity());
    assert!(!Transform::fit(Vec2::new(1.0, 0.0), 1.0).is_identity());
}

#[test]
fn css_orders_translate_scale_rotate() {
    let t = Transform {
        translate: Vec2::new(10.0, -4.5),
        scale: 0.5,
        rotate_x_deg: 10.0,
        rotate_z_deg: -1.6,
        squeeze: Vec2::new(0.95, 0.84),
    };
    assert_eq!(
        t.to_css(),
        "translate3d(10px, -4.5px, 0) scale(0.5) rotateX(10deg) rotateZ(-1.6deg) scaleX(0.95) scaleY(0.84)"
    );
}

#[test]
fn css_omits_neutral_decorative_parts() {
    let t = Transform::fit(Vec2::new(3.0, 7.0), 0.25);
    assert_eq!(t.to_css(), "translate3d(3px, 7px, 0) scale(0.25)");
}

#[test]
fn css_is_byte_identical_for_equal_inputs() {
    let t = Transform::fit(Vec2::new(0.1 + 0.2, 0.0), 1.0 / 3.0);
    assert_eq!(t.to_css(), t.to_css());
}

#[test]
fn element_style_default_drives_nothing() {
    let s = ElementStyle::default();
    assert!(s.transform.is_none());
    assert!(s.opacity.is_none());
    assert!(s.blur_px.is_none());
    assert!(s.border_radius_px.is_none());
    assert!(s.letter_spacing_em.is_none());
    assert!(s.matte_inset_px.is_none());
    assert!(s.interactive.is_none());
}
