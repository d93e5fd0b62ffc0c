use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use super::Category;

algorithm!(Compress, Category::Compress);

/// SSH compression algorithms.
#[non_exhaustive]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
    FromRepr,
)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Compress {
    /// No compression algorithm.
    #[default]
    None = 1,

    /// zlib compression, delayed until user authentication succeeded (OpenSSH mode).
    #[strum(serialize = "zlib@openssh.com")]
    ZlibOpenssh,

    /// zlib compression.
    Zlib,
}

impl Compress {
    /// Whether the payloads actually get compressed.
    pub fn is_compressing(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether compression only starts after user authentication.
    pub fn is_delayed(&self) -> bool {
        matches!(self, Self::ZlibOpenssh)
    }
}
