//! Colour gradients for letters and pool sizes
//!
//! A tested letter is placed on a two-axis gradient: placement runs from
//! yellow (present, but elsewhere) to green (present, here), and presence
//! fades the result from gray (absent) to full colour.

use crate::scoring::LetterSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Self = Self::new(83, 161, 78);
    pub const YELLOW: Self = Self::new(201, 180, 58);
    pub const GRAY: Self = Self::new(110, 112, 114);
    pub const LIGHT: Self = Self::new(200, 200, 200);
    pub const RED: Self = Self::new(210, 60, 60);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation; `t` is clamped to 0.0-1.0
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::output::colors::Rgb;
    ///
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.lerp(white, 0.0), black);
    /// assert_eq!(black.lerp(white, 1.0), white);
    /// assert_eq!(black.lerp(white, 0.5), Rgb::new(127, 127, 127));
    /// ```
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |from: u8, to: u8| {
            let from = f64::from(from);
            (from + (f64::from(to) - from) * t) as u8
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

/// Colour for one tested letter
#[must_use]
pub fn signal_color(signal: &LetterSignal) -> Rgb {
    let hue = Rgb::YELLOW.lerp(Rgb::GREEN, signal.placement());
    Rgb::GRAY.lerp(hue, signal.overall_frequency)
}

/// Pool sizes at or above this are drawn in the neutral colour
const POOL_GRADIENT_SPAN: f64 = 50.0;

/// Colour for a remaining-word count: greener as it approaches one word
#[must_use]
pub fn pool_color(pool_size: usize) -> Rgb {
    if pool_size == 0 {
        return Rgb::RED;
    }
    Rgb::GREEN.lerp(Rgb::LIGHT, pool_size as f64 / POOL_GRADIENT_SPAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(position_frequency: f64, overall_frequency: f64) -> LetterSignal {
        LetterSignal {
            letter: b'a',
            position: 0,
            position_frequency,
            overall_frequency,
        }
    }

    #[test]
    fn lerp_clamps() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(110, 120, 130);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, f64::NAN), a);
    }

    #[test]
    fn certain_letter_is_green() {
        assert_eq!(signal_color(&signal(1.0, 1.0)), Rgb::GREEN);
    }

    #[test]
    fn present_elsewhere_is_yellow() {
        assert_eq!(signal_color(&signal(0.0, 1.0)), Rgb::YELLOW);
    }

    #[test]
    fn absent_letter_is_gray() {
        assert_eq!(signal_color(&signal(0.0, 0.0)), Rgb::GRAY);
    }

    #[test]
    fn pool_colors() {
        assert_eq!(pool_color(0), Rgb::RED);
        assert_eq!(pool_color(50), Rgb::LIGHT);
        assert_eq!(pool_color(5000), Rgb::LIGHT);
        assert_ne!(pool_color(1), Rgb::LIGHT);
    }
}
