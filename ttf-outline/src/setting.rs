//! Settings that control how a font file is loaded.

/// How to treat a `head` table with the wrong magic number.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadValidation {
    /// Fail with [`ReadError::MagicMismatch`](crate::ReadError::MagicMismatch).
    #[default]
    Strict,
    /// Log a warning and keep loading.
    Lenient,
}

/// Options for [`FontFile::from_bytes_with_settings`](crate::FontFile::from_bytes_with_settings).
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadSettings {
    pub head_validation: HeadValidation,
}

impl LoadSettings {
    /// Settings that accept a bad `head` magic number.
    pub fn lenient() -> Self {
        Self {
            head_validation: HeadValidation::Lenient,
        }
    }
}
