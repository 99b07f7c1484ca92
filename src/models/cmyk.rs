//! Model a color as subtractive CMYK ink coverage.

use crate::color::{Component, Components};
use crate::models::rgb::Rgb;

/// A color specified as CMYK ink coverage, each channel a fraction in
/// [0, 1].
///
/// Front ends that work in 0..=100 integer percent convert at the boundary
/// with [`Cmyk::from_percentages`] and [`Cmyk::to_percentages`] so that
/// every one of them quantizes the same way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan channel of the color.
    pub cyan: Component,
    /// The magenta channel of the color.
    pub magenta: Component,
    /// The yellow channel of the color.
    pub yellow: Component,
    /// The black (key) channel of the color.
    pub black: Component,
}

impl Cmyk {
    /// Create a new color with CMYK channels.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, black: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            black,
        }
    }

    /// Create a color from integer ink percentages.
    pub fn from_percentages(cyan: i32, magenta: i32, yellow: i32, black: i32) -> Self {
        Self::new(
            cyan as Component / 100.0,
            magenta as Component / 100.0,
            yellow as Component / 100.0,
            black as Component / 100.0,
        )
    }

    /// The channels as integer ink percentages, rounded to nearest with
    /// halves away from zero.
    pub fn to_percentages(&self) -> [i32; 4] {
        [
            (self.cyan * 100.0).round() as i32,
            (self.magenta * 100.0).round() as i32,
            (self.yellow * 100.0).round() as i32,
            (self.black * 100.0).round() as i32,
        ]
    }

    /// Reconstruct the 8-bit sRGB color this ink coverage reproduces.
    ///
    /// The formula cannot leave [0, 255] while every channel is in [0, 1],
    /// so the clamp inside the quantization never reports anything.
    pub fn to_rgb(&self) -> Rgb {
        let white = 1.0 - self.black;
        Rgb::from_fractions(Components(
            (1.0 - self.cyan) * white,
            (1.0 - self.magenta) * white,
            (1.0 - self.yellow) * white,
        ))
    }
}
