//! fixed-point numerical types

/// 32-bit signed fixed point number with 16 bits of fraction.
///
/// Used for table versions and the font revision in `head`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Fixed(i32);

impl Fixed {
    const FRACT_BITS: usize = 16;

    /// Creates a fixed point value from a 64-bit float, rounding to the
    /// nearest representable value.
    pub fn from_f64(x: f64) -> Self {
        Self((x * (1u32 << Self::FRACT_BITS) as f64).round() as i32)
    }

    /// Returns the value as a 64-bit float.
    ///
    /// This divides the raw bits by 2^16, and is exact.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << Self::FRACT_BITS) as f64
    }
}

impl std::fmt::Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_f64().fmt(f)
    }
}

impl std::fmt::Debug for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

crate::raw::newtype_scalar!(Fixed, [u8; 4]);
