//! Entry animation helpers.
//!
//! Keyframes live in `style/main.css`; views pick a class and a staggered
//! `animation-delay` per element so cards and form rows fade in one after
//! another.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Delay between consecutive staggered elements, in seconds.
pub const STAGGER_SECONDS: f64 = 0.1;

/// Fade up from slightly below.
pub const FADE_UP: &str = "anim-fade-up";
/// Fade in place.
pub const FADE_IN: &str = "anim-fade-in";
/// Slide down from above (header).
pub const SLIDE_DOWN: &str = "anim-slide-down";
/// Scale in from 95%.
pub const SCALE_IN: &str = "anim-scale-in";

/// Delay in seconds for the `index`-th element after `base`.
#[must_use]
pub fn stagger_delay(base: f64, index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let step = index as f64 * STAGGER_SECONDS;
    base + step
}

/// Inline `style` value for the `index`-th staggered element.
#[must_use]
pub fn stagger_style(base: f64, index: usize) -> String {
    format!("animation-delay: {:.2}s;", stagger_delay(base, index))
}
