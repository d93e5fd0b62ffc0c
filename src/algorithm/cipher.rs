use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use super::Category;

algorithm!(Cipher, Category::Cipher);

/// SSH cipher algorithms.
#[non_exhaustive]
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum Cipher {
    /// AES-256 in Galois/Counter Mode (GCM).
    #[strum(serialize = "aes256-gcm@openssh.com")]
    Aes256Gcm = 1,

    /// AES-128 in Galois/Counter Mode (GCM).
    #[strum(serialize = "aes128-gcm@openssh.com")]
    Aes128Gcm,

    /// AES-256 in counter (CTR) mode.
    Aes256Ctr,

    /// AES-192 in counter (CTR) mode.
    Aes192Ctr,

    /// AES-128 in counter (CTR) mode.
    Aes128Ctr,

    /// AES-256 in cipher block chaining (CBC) mode.
    Aes256Cbc,

    /// AES-192 in cipher block chaining (CBC) mode.
    Aes192Cbc,

    /// AES-128 in cipher block chaining (CBC) mode.
    Aes128Cbc,

    /// TripleDES in cipher block chaining (CBC) mode.
    #[strum(serialize = "3des-cbc")]
    TDesCbc,
}

impl Cipher {
    /// Whether the cipher authenticates the messages itself, making the MAC irrelevant.
    pub fn is_aead(&self) -> bool {
        matches!(self, Self::Aes256Gcm | Self::Aes128Gcm)
    }

    /// Whether the cipher operates in counter (CTR) mode.
    pub fn is_ctr(&self) -> bool {
        matches!(self, Self::Aes256Ctr | Self::Aes192Ctr | Self::Aes128Ctr)
    }

    /// Whether the cipher operates in cipher block chaining (CBC) mode.
    pub fn is_cbc(&self) -> bool {
        matches!(
            self,
            Self::Aes256Cbc | Self::Aes192Cbc | Self::Aes128Cbc | Self::TDesCbc
        )
    }

    /// Size of the cipher's blocks, in bytes.
    pub fn block_size(&self) -> usize {
        match self {
            Self::TDesCbc => 8,
            Self::Aes256Gcm
            | Self::Aes128Gcm
            | Self::Aes256Ctr
            | Self::Aes192Ctr
            | Self::Aes128Ctr
            | Self::Aes256Cbc
            | Self::Aes192Cbc
            | Self::Aes128Cbc => 16,
        }
    }

    /// Size of the cipher's key, in bytes.
    pub fn key_size(&self) -> usize {
        match self {
            Self::Aes128Gcm | Self::Aes128Cbc | Self::Aes128Ctr => 16,
            Self::TDesCbc | Self::Aes192Cbc | Self::Aes192Ctr => 24,
            Self::Aes256Gcm | Self::Aes256Cbc | Self::Aes256Ctr => 32,
        }
    }

    /// Size of the cipher's initialization vector, in bytes.
    pub fn iv_size(&self) -> usize {
        match self {
            Self::TDesCbc => 8,
            Self::Aes256Gcm | Self::Aes128Gcm => 12,
            Self::Aes256Cbc
            | Self::Aes192Cbc
            | Self::Aes128Cbc
            | Self::Aes256Ctr
            | Self::Aes192Ctr
            | Self::Aes128Ctr => 16,
        }
    }

    /// Size of the authentication tag appended to messages, in bytes.
    pub fn tag_size(&self) -> usize {
        if self.is_aead() {
            16
        } else {
            0
        }
    }
}
