//! trichroma keeps the three user-facing representations of a color in
//! step: 8-bit sRGB, subtractive CMYK, and CIE-Lab by way of CIE-XYZ under
//! the D65/2 degree reference white.
//!
//! The conversion core is pure. Every operation is a total function of its
//! operands, and the only domain signal besides the converted values is the
//! set of channels that had to be clamped when a Lab point falls outside
//! the sRGB cube.
//!
//! ```rust
//! use trichroma::{Lab, Swatch};
//!
//! let swatch = Swatch::from_lab(Lab::new(50.0, 100.0, 100.0));
//! assert!(swatch.clipped());
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod math;
mod models;
#[cfg(test)]
mod test;

pub use color::{Component, Components, GamutFlags};
pub use convert::Swatch;
pub use models::{Cmyk, Lab, LinearRgb, Rgb, Xyz};
