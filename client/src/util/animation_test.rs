use super::*;

#[test]
fn stagger_delay_steps_by_tenth_of_second() {
    assert!((stagger_delay(0.0, 0) - 0.0).abs() < f64::EPSILON);
    assert!((stagger_delay(0.0, 3) - 0.3).abs() < 1e-9);
    assert!((stagger_delay(0.5, 2) - 0.7).abs() < 1e-9);
}

#[test]
fn stagger_style_formats_css_delay() {
    assert_eq!(stagger_style(0.0, 0), "animation-delay: 0.00s;");
    assert_eq!(stagger_style(0.2, 4), "animation-delay: 0.60s;");
}
