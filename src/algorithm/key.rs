use ssh_key::{Algorithm as KeyAlgorithm, EcdsaCurve};
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use super::Category;
use crate::Error;

algorithm!(HostKey, Category::HostKey);

/// SSH host key algorithms.
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
pub enum HostKey {
    /// Ed25519 keys.
    #[strum(serialize = "ssh-ed25519")]
    Ed25519 = 1,

    /// ECDSA keys over NIST P-256.
    #[strum(serialize = "ecdsa-sha2-nistp256")]
    EcdsaNistp256,

    /// ECDSA keys over NIST P-384.
    #[strum(serialize = "ecdsa-sha2-nistp384")]
    EcdsaNistp384,

    /// ECDSA keys over NIST P-521.
    #[strum(serialize = "ecdsa-sha2-nistp521")]
    EcdsaNistp521,

    /// RSA keys, with sha-1 signatures.
    #[strum(serialize = "ssh-rsa")]
    Rsa,

    /// DSA keys.
    #[strum(serialize = "ssh-dss")]
    Dss,
}

impl HostKey {
    /// Whether this is an elliptic-curve DSA key type.
    pub fn is_ecdsa(&self) -> bool {
        matches!(
            self,
            Self::EcdsaNistp256 | Self::EcdsaNistp384 | Self::EcdsaNistp521
        )
    }

    /// Whether this is the RSA key type.
    pub fn is_rsa(&self) -> bool {
        matches!(self, Self::Rsa)
    }

    /// Whether this is the DSA key type.
    pub fn is_dss(&self) -> bool {
        matches!(self, Self::Dss)
    }

    /// Whether this is the Ed25519 key type.
    pub fn is_ed25519(&self) -> bool {
        matches!(self, Self::Ed25519)
    }

    /// The curve identifier of ECDSA key types, as found in key blobs.
    pub fn curve(&self) -> Option<&'static str> {
        match self {
            Self::EcdsaNistp256 => Some("nistp256"),
            Self::EcdsaNistp384 => Some("nistp384"),
            Self::EcdsaNistp521 => Some("nistp521"),
            _ => None,
        }
    }

    /// Lookup the ECDSA key type for a curve identifier.
    pub fn from_curve(curve: &str) -> Option<Self> {
        match curve {
            "nistp256" => Some(Self::EcdsaNistp256),
            "nistp384" => Some(Self::EcdsaNistp384),
            "nistp521" => Some(Self::EcdsaNistp521),
            _ => None,
        }
    }
}

impl From<HostKey> for KeyAlgorithm {
    fn from(value: HostKey) -> Self {
        match value {
            HostKey::Ed25519 => Self::Ed25519,
            HostKey::EcdsaNistp256 => Self::Ecdsa {
                curve: EcdsaCurve::NistP256,
            },
            HostKey::EcdsaNistp384 => Self::Ecdsa {
                curve: EcdsaCurve::NistP384,
            },
            HostKey::EcdsaNistp521 => Self::Ecdsa {
                curve: EcdsaCurve::NistP521,
            },
            HostKey::Rsa => Self::Rsa { hash: None },
            HostKey::Dss => Self::Dsa,
        }
    }
}

impl TryFrom<&KeyAlgorithm> for HostKey {
    type Error = Error;

    fn try_from(value: &KeyAlgorithm) -> Result<Self, Self::Error> {
        match value {
            KeyAlgorithm::Ed25519 => Ok(Self::Ed25519),
            KeyAlgorithm::Ecdsa {
                curve: EcdsaCurve::NistP256,
            } => Ok(Self::EcdsaNistp256),
            KeyAlgorithm::Ecdsa {
                curve: EcdsaCurve::NistP384,
            } => Ok(Self::EcdsaNistp384),
            KeyAlgorithm::Ecdsa {
                curve: EcdsaCurve::NistP521,
            } => Ok(Self::EcdsaNistp521),
            KeyAlgorithm::Rsa { hash: None } => Ok(Self::Rsa),
            KeyAlgorithm::Dsa => Ok(Self::Dss),
            _ => Err(Error::UnsupportedAlgorithm),
        }
    }
}
