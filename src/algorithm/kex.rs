use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use super::{Category, Digest};

algorithm!(Kex, Category::Kex);

/// SSH key-exchange algorithms.
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
#[repr(u8)]
pub enum Kex {
    /// Curve25519 ECDH with sha-2-256 digest (pre-RFC 8731).
    #[strum(serialize = "curve25519-sha256@libssh.org")]
    Curve25519Sha256Libssh = 1,

    /// NIST P-256 ECDH with sha-2-256 digest.
    #[strum(serialize = "ecdh-sha2-nistp256")]
    EcdhSha2Nistp256,

    /// NIST P-384 ECDH with sha-2-384 digest.
    #[strum(serialize = "ecdh-sha2-nistp384")]
    EcdhSha2Nistp384,

    /// NIST P-521 ECDH with sha-2-512 digest.
    #[strum(serialize = "ecdh-sha2-nistp521")]
    EcdhSha2Nistp521,

    /// Diffie-Hellman group exchange with sha-2-256 digest.
    #[strum(serialize = "diffie-hellman-group-exchange-sha256")]
    DiffieHellmanGroupExchangeSha256,

    /// Diffie-Hellman group exchange with sha-1 digest.
    #[strum(serialize = "diffie-hellman-group-exchange-sha1")]
    DiffieHellmanGroupExchangeSha1,

    /// Diffie-Hellman on the 2048-bit MODP group with sha-1 digest.
    #[strum(serialize = "diffie-hellman-group14-sha1")]
    DiffieHellmanGroup14Sha1,

    /// Diffie-Hellman on the 1024-bit Oakley group with sha-1 digest.
    #[strum(serialize = "diffie-hellman-group1-sha1")]
    DiffieHellmanGroup1Sha1,
}

impl Kex {
    /// Whether the exchange happens over Curve25519.
    pub fn is_x25519(&self) -> bool {
        matches!(self, Self::Curve25519Sha256Libssh)
    }

    /// Whether the exchange is an ECDH over one of the NIST curves.
    pub fn is_ecdh(&self) -> bool {
        matches!(
            self,
            Self::EcdhSha2Nistp256 | Self::EcdhSha2Nistp384 | Self::EcdhSha2Nistp521
        )
    }

    /// Whether the group is negotiated with the server before the exchange.
    pub fn is_group_exchange(&self) -> bool {
        matches!(
            self,
            Self::DiffieHellmanGroupExchangeSha256 | Self::DiffieHellmanGroupExchangeSha1
        )
    }

    /// Whether the exchange happens over a well-known, fixed group.
    pub fn is_fixed_group(&self) -> bool {
        matches!(
            self,
            Self::DiffieHellmanGroup14Sha1 | Self::DiffieHellmanGroup1Sha1
        )
    }

    /// Whether the exchange is a finite-field Diffie-Hellman.
    pub fn is_diffie_hellman(&self) -> bool {
        self.is_group_exchange() || self.is_fixed_group()
    }

    /// The curve name of elliptic-curve exchanges.
    pub fn curve(&self) -> Option<&'static str> {
        match self {
            Self::Curve25519Sha256Libssh => Some("curve25519"),
            Self::EcdhSha2Nistp256 => Some("nistp256"),
            Self::EcdhSha2Nistp384 => Some("nistp384"),
            Self::EcdhSha2Nistp521 => Some("nistp521"),
            _ => None,
        }
    }

    /// The digest computing the exchange hash.
    pub fn digest(&self) -> Digest {
        match self {
            Self::Curve25519Sha256Libssh
            | Self::EcdhSha2Nistp256
            | Self::DiffieHellmanGroupExchangeSha256 => Digest::Sha256,
            Self::EcdhSha2Nistp384 => Digest::Sha384,
            Self::EcdhSha2Nistp521 => Digest::Sha512,
            Self::DiffieHellmanGroupExchangeSha1
            | Self::DiffieHellmanGroup14Sha1
            | Self::DiffieHellmanGroup1Sha1 => Digest::Sha1,
        }
    }
}
