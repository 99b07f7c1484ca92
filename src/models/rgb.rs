//! Model a color in the sRGB color space.

use crate::color::{Component, Components, GamutFlags};
use crate::math::{transform, transform_3x3, Transform};
use crate::models::cmyk::Cmyk;
use crate::models::lab::Lab;
use crate::models::xyz::Xyz;

/// Gamma-encoded excursions smaller than half an 8-bit quantum round back
/// into range, so they are not reported as clipping.
const CLIP_TOLERANCE: Component = 0.5 / 255.0;

/// Distance from full key under which the chromatic channels of the CMYK
/// derivation carry no information.
const BLACK_TOLERANCE: Component = 1.0e-12;

/// A color specified in the sRGB color space, 8 bits per channel.
///
/// Channels are nominally 0..=255. Out-of-range values are representable,
/// since a text field may hand one in, and conversions leave input channels
/// untouched; only channels this crate produces are clamped into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel of the color.
    pub red: i32,
    /// The green channel of the color.
    pub green: i32,
    /// The blue channel of the color.
    pub blue: i32,
}

impl Rgb {
    /// Create a new color with 8-bit RGB channels.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Quantize gamma-encoded fractional channels to 8 bits, rounding to
    /// nearest and clamping to the displayable range.
    pub(crate) fn from_fractions(fractions: Components) -> Self {
        fn quantize(value: Component) -> i32 {
            (value * 255.0).round().clamp(0.0, 255.0) as i32
        }

        Self::new(
            quantize(fractions.0),
            quantize(fractions.1),
            quantize(fractions.2),
        )
    }

    /// The channels as fractions of full scale.
    fn to_fractions(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Remove the gamma encoding, yielding linear-light channels.
    pub fn to_linear_light(&self) -> LinearRgb {
        let Components(red, green, blue) = to_linear_light(&self.to_fractions());
        LinearRgb::new(red, green, blue)
    }

    /// Derive the subtractive CMYK representation of this color.
    pub fn to_cmyk(&self) -> Cmyk {
        let Components(red, green, blue) = self.to_fractions();
        let key = 1.0 - red.max(green).max(blue);

        if key < 1.0 - BLACK_TOLERANCE {
            let white = 1.0 - key;
            Cmyk::new(
                (1.0 - red - key) / white,
                (1.0 - green - key) / white,
                (1.0 - blue - key) / white,
                key,
            )
        } else {
            Cmyk::new(0.0, 0.0, 0.0, key)
        }
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        self.to_linear_light().to_xyz()
    }

    /// Convert this color to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

/// sRGB channels with the gamma encoding removed: linear light, as
/// fractions of full scale.
///
/// Values reconstructed from XYZ may land outside [0, 1]; that is the
/// out-of-gamut condition [`LinearRgb::to_rgb`] reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRgb {
    /// The red channel of the color.
    pub red: Component,
    /// The green channel of the color.
    pub green: Component,
    /// The blue channel of the color.
    pub blue: Component,
}

impl LinearRgb {
    /// Create a new color with linear-light RGB channels.
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        let Components(x, y, z) = transform(&TO_XYZ, Components(self.red, self.green, self.blue));
        Xyz::new(x * 100.0, y * 100.0, z * 100.0)
    }

    /// Re-apply the gamma encoding and quantize to 8 bits, reporting the
    /// channels that fell outside the sRGB cube before clamping.
    pub fn to_rgb(&self) -> (Rgb, GamutFlags) {
        let encoded = to_gamma_encoded(&Components(self.red, self.green, self.blue));

        let mut flags = GamutFlags::empty();
        if out_of_range(encoded.0) {
            flags |= GamutFlags::RED_CLIPPED;
        }
        if out_of_range(encoded.1) {
            flags |= GamutFlags::GREEN_CLIPPED;
        }
        if out_of_range(encoded.2) {
            flags |= GamutFlags::BLUE_CLIPPED;
        }

        (Rgb::from_fractions(encoded), flags)
    }
}

impl From<Xyz> for LinearRgb {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        let scaled = Components(value.x / 100.0, value.y / 100.0, value.z / 100.0);
        let Components(red, green, blue) = transform(&FROM_XYZ, scaled);
        Self::new(red, green, blue)
    }
}

fn out_of_range(value: Component) -> bool {
    value < -CLIP_TOLERANCE || value > 1.0 + CLIP_TOLERANCE
}

/// Forward piecewise sRGB transfer function, extended to negative values
/// through the sign.
fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    })
}

/// Inverse piecewise sRGB transfer function, extended to negative values
/// through the sign.
fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs < 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_derives_no_ink() {
        let cmyk = Rgb::new(255, 255, 255).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn black_uses_only_the_key_channel() {
        let cmyk = Rgb::new(0, 0, 0).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn primaries_saturate_the_opposing_inks() {
        assert_eq!(Rgb::new(255, 0, 0).to_cmyk(), Cmyk::new(0.0, 1.0, 1.0, 0.0));
        assert_eq!(Rgb::new(0, 255, 0).to_cmyk(), Cmyk::new(1.0, 0.0, 1.0, 0.0));
        assert_eq!(Rgb::new(0, 0, 255).to_cmyk(), Cmyk::new(1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn white_maps_to_full_lightness() {
        let lab = Rgb::new(255, 255, 255).to_lab();
        approx::assert_abs_diff_eq!(lab.lightness, 100.0, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(lab.a, 0.0, epsilon = 5.0e-2);
        approx::assert_abs_diff_eq!(lab.b, 0.0, epsilon = 5.0e-2);
    }

    #[test]
    fn black_maps_to_the_lab_origin() {
        let lab = Rgb::new(0, 0, 0).to_lab();
        crate::assert_component_eq!(lab.lightness, 0.0);
        crate::assert_component_eq!(lab.a, 0.0);
        crate::assert_component_eq!(lab.b, 0.0);
    }

    #[test]
    fn cmyk_round_trip_is_within_one_unit() {
        for red in (0..=255).step_by(17) {
            for green in (0..=255).step_by(17) {
                for blue in (0..=255).step_by(17) {
                    let source = Rgb::new(red, green, blue);
                    let cmyk = source.to_cmyk();

                    for channel in [cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.black] {
                        assert!((0.0..=1.0).contains(&channel), "{source:?} -> {cmyk:?}");
                    }

                    let back = cmyk.to_rgb();
                    assert!((back.red - source.red).abs() <= 1, "{source:?} -> {back:?}");
                    assert!((back.green - source.green).abs() <= 1, "{source:?} -> {back:?}");
                    assert!((back.blue - source.blue).abs() <= 1, "{source:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn lab_round_trip_stays_in_gamut() {
        for red in (0..=255).step_by(51) {
            for green in (0..=255).step_by(51) {
                for blue in (0..=255).step_by(51) {
                    let source = Rgb::new(red, green, blue);
                    let lab = source.to_lab();
                    assert!(
                        (0.0..=100.0).contains(&lab.lightness),
                        "{source:?} -> {lab:?}"
                    );

                    let (back, flags) = lab.to_rgb();
                    assert!(flags.is_empty(), "{source:?} reported {flags:?}");
                    assert!((back.red - source.red).abs() <= 2, "{source:?} -> {back:?}");
                    assert!((back.green - source.green).abs() <= 2, "{source:?} -> {back:?}");
                    assert!((back.blue - source.blue).abs() <= 2, "{source:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn key_never_decreases_as_brightness_falls() {
        let mut previous = Rgb::new(255, 255, 255).to_cmyk().black;
        for value in (0..=255).rev() {
            let key = Rgb::new(value, value, value).to_cmyk().black;
            assert!(key >= previous, "key regressed at gray {value}");
            previous = key;
        }
    }

    #[test]
    fn quantization_clamps_produced_channels() {
        let rgb = Rgb::from_fractions(Components(1.2, -0.3, 0.5));
        assert_eq!(rgb, Rgb::new(255, 0, 128));
    }
}
