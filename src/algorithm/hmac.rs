use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use super::{Category, Digest};

algorithm!(Hmac, Category::Hmac);

/// SSH hmac algorithms.
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
pub enum Hmac {
    /// HMAC with sha-2-512 digest on encrypted message.
    #[strum(serialize = "hmac-sha2-512-etm@openssh.com")]
    HmacSha512ETM = 1,

    /// HMAC with sha-2-256 digest on encrypted message.
    #[strum(serialize = "hmac-sha2-256-etm@openssh.com")]
    HmacSha256ETM,

    /// HMAC with sha-2-512 digest.
    #[strum(serialize = "hmac-sha2-512")]
    HmacSha512,

    /// HMAC with sha-2-256 digest.
    #[strum(serialize = "hmac-sha2-256")]
    HmacSha256,

    /// HMAC with sha-1 digest on encrypted message.
    #[strum(serialize = "hmac-sha1-etm@openssh.com")]
    HmacSha1ETM,

    /// HMAC with sha-1 digest.
    #[strum(serialize = "hmac-sha1")]
    HmacSha1,

    /// HMAC with md5 digest on encrypted message.
    #[strum(serialize = "hmac-md5-etm@openssh.com")]
    HmacMd5ETM,

    /// HMAC with md5 digest.
    #[strum(serialize = "hmac-md5")]
    HmacMd5,
}

impl Hmac {
    /// The digest the HMAC is built upon.
    pub fn digest(&self) -> Digest {
        match self {
            Self::HmacSha512ETM | Self::HmacSha512 => Digest::Sha512,
            Self::HmacSha256ETM | Self::HmacSha256 => Digest::Sha256,
            Self::HmacSha1ETM | Self::HmacSha1 => Digest::Sha1,
            Self::HmacMd5ETM | Self::HmacMd5 => Digest::Md5,
        }
    }

    /// Size of the produced tag, in bytes.
    pub fn size(&self) -> usize {
        self.digest().output_size()
    }

    /// Whether the tag is computed over the encrypted message.
    pub fn is_etm(&self) -> bool {
        matches!(
            self,
            Self::HmacSha512ETM | Self::HmacSha256ETM | Self::HmacSha1ETM | Self::HmacMd5ETM
        )
    }
}
