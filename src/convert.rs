//! Keep the three user-facing representations of one color in agreement.
//!
//! Exactly one constructor runs per user edit. The edited representation is
//! the source of truth for that edit; the other two are recomputed from it,
//! never merged with stale values. Construction has no side effects, so a
//! front end can rebuild its widgets from the result without guarding
//! against feedback from its own writes.

use crate::color::GamutFlags;
use crate::models::{Cmyk, Lab, Rgb};

/// One color captured in every representation the explorer displays,
/// together with the channels that had to be clamped to reach sRGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    /// The 8-bit sRGB view of the color.
    pub rgb: Rgb,
    /// The CMYK view of the color.
    pub cmyk: Cmyk,
    /// The CIE-Lab view of the color.
    pub lab: Lab,
    /// Channels clamped while deriving the sRGB view.
    pub gamut: GamutFlags,
}

impl Swatch {
    /// Resolve a swatch from an edited RGB value. RGB input is already in
    /// the display space, so the gamut flags are always empty.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            lab: rgb.to_lab(),
            gamut: GamutFlags::empty(),
        }
    }

    /// Resolve a swatch from an edited Lab value. The flags report the RGB
    /// channels clamped when the point lies outside the sRGB cube; the CMYK
    /// view is derived from the clamped RGB.
    pub fn from_lab(lab: Lab) -> Self {
        let (rgb, gamut) = lab.to_rgb();
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            lab,
            gamut,
        }
    }

    /// Resolve a swatch from an edited CMYK value. The reconstruction is
    /// range-preserving, so the gamut flags are always empty.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let rgb = cmyk.to_rgb();
        Self {
            rgb,
            cmyk,
            lab: rgb.to_lab(),
            gamut: GamutFlags::empty(),
        }
    }

    /// True when any channel was clamped to reach the sRGB view.
    pub fn clipped(&self) -> bool {
        !self.gamut.is_empty()
    }
}
