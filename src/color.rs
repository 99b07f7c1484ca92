//! Scalar and component types shared by every color model.

use bitflags::bitflags;

/// A 64-bit floating point value that all fractional components are stored
/// as. Display layers round to integers; the math in between stays in
/// double precision.
pub type Component = f64;

/// Represent three components that describe a color in one model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Marks the RGB channels that left the sRGB cube during a conversion
    /// and were clamped into range.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GamutFlags: u8 {
        /// Set when the red channel was clamped.
        const RED_CLIPPED = 1 << 0;
        /// Set when the green channel was clamped.
        const GREEN_CLIPPED = 1 << 1;
        /// Set when the blue channel was clamped.
        const BLUE_CLIPPED = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let doubled = Components(0.1, 0.2, 0.3).map(|v| v * 2.0);
        assert_eq!(doubled, Components(0.2, 0.4, 0.6));
    }

    #[test]
    fn empty_flags_mean_no_clipping() {
        let mut flags = GamutFlags::empty();
        assert!(flags.is_empty());

        flags |= GamutFlags::GREEN_CLIPPED;
        assert!(!flags.is_empty());
        assert!(flags.contains(GamutFlags::GREEN_CLIPPED));
        assert!(!flags.contains(GamutFlags::RED_CLIPPED));
    }
}
