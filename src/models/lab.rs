//! Model a color in the CIE-Lab color space.

use crate::color::{Component, Components, GamutFlags};
use crate::models::rgb::Rgb;
use crate::models::xyz::Xyz;

/// White-relative ratios above this threshold fall in the cube-root region
/// of the CIE lightness function; below it the function is linear.
const EPSILON: Component = 0.008856;

/// Slope of the linear region.
const SLOPE: Component = 7.787;

/// Offset shared by both regions.
const OFFSET: Component = 16.0 / 116.0;

/// A color specified in the CIE-Lab color space: lightness 0..100 and two
/// chromaticity axes roughly spanning -128..127.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The lightness component.
    pub lightness: Component,
    /// The a component (green to red axis).
    pub a: Component,
    /// The b component (blue to yellow axis).
    pub b: Component,
}

impl Lab {
    /// Create a new color with Lab components.
    pub fn new(lightness: Component, a: Component, b: Component) -> Self {
        Self { lightness, a, b }
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        // The branch test compares the cube against EPSILON rather than the
        // value against EPSILON's cube root; the cube is monotonic, so the
        // two forms agree.
        let ratios = Components(fx, fy, fz).map(|t| {
            let cubed = t * t * t;
            if cubed > EPSILON {
                cubed
            } else {
                (t - OFFSET) / SLOPE
            }
        });

        Xyz::new(
            ratios.0 * Xyz::WHITE_POINT.0,
            ratios.1 * Xyz::WHITE_POINT.1,
            ratios.2 * Xyz::WHITE_POINT.2,
        )
    }

    /// Convert this color to 8-bit sRGB, reporting the channels that fell
    /// outside the sRGB cube before clamping.
    pub fn to_rgb(&self) -> (Rgb, GamutFlags) {
        self.to_xyz().to_rgb()
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let ratios = Components(
            value.x / Xyz::WHITE_POINT.0,
            value.y / Xyz::WHITE_POINT.1,
            value.z / Xyz::WHITE_POINT.2,
        );

        let Components(fx, fy, fz) = ratios.map(|t| {
            if t > EPSILON {
                t.cbrt()
            } else {
                SLOPE * t + OFFSET
            }
        });

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}
