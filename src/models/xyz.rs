//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components, GamutFlags};
use crate::models::lab::Lab;
use crate::models::rgb::{LinearRgb, Rgb};

/// A color as CIE tristimulus values, scaled so that Y is 100 at the
/// reference white.
///
/// Purely an interchange point between the sRGB and Lab models; never shown
/// to a user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    /// The X tristimulus value.
    pub x: Component,
    /// The Y tristimulus value.
    pub y: Component,
    /// The Z tristimulus value.
    pub z: Component,
}

impl Xyz {
    /// The D65/2 degree reference white, on the same 0..100 scale.
    pub const WHITE_POINT: Components = Components(95.047, 100.0, 108.883);

    /// Create a new color with XYZ tristimulus values.
    pub fn new(x: Component, y: Component, z: Component) -> Self {
        Self { x, y, z }
    }

    /// Convert this color to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        Lab::from(*self)
    }

    /// Convert this color to 8-bit sRGB, reporting the channels that fell
    /// outside the sRGB cube before clamping.
    pub fn to_rgb(&self) -> (Rgb, GamutFlags) {
        LinearRgb::from(*self).to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_lands_on_the_reference_scale() {
        let white = Rgb::new(255, 255, 255).to_xyz();
        approx::assert_abs_diff_eq!(white.x, 95.047, epsilon = 5.0e-3);
        approx::assert_abs_diff_eq!(white.y, 100.0, epsilon = 1.0e-6);
        approx::assert_abs_diff_eq!(white.z, 108.883, epsilon = 2.5e-2);
    }

    #[test]
    fn mid_gray_keeps_the_white_ratios() {
        let gray = Rgb::new(128, 128, 128).to_xyz();
        let luminance = gray.y / 100.0;

        crate::assert_component_eq!(gray.x / Xyz::WHITE_POINT.0, luminance);
        approx::assert_abs_diff_eq!(gray.z / Xyz::WHITE_POINT.2, luminance, epsilon = 1.0e-4);
    }
}
