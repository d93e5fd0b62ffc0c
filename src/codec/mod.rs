//! Public key and signature blob codecs, in the format of the SSH host key conventions.
//!
//! Every blob starts with a format identifier, validated before any further field is read.

use ssh_encoding::{Decode, Reader};

use crate::{algorithm::HostKey, Error, Malformed, Result};

mod mpint;
pub use mpint::{Canonical, MpintCodec};

mod key;
pub use key::{DssKey, EcdsaKey, Ed25519Key, KeyCodec, KeyMaterial, RsaKey};

mod signature;
pub use signature::{
    DssSignature, EcdsaSignature, Ed25519Signature, RsaSignature, SignatureCodec,
    SignatureMaterial, DSS_COMPONENT_SIZE,
};

/// The structurally distinct key and signature variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// DSA, as `ssh-dss`.
    Dss,

    /// RSA, as `ssh-rsa`.
    Rsa,

    /// ECDSA, as `ecdsa-sha2-<curve>`.
    Ecdsa,

    /// Ed25519, as `ssh-ed25519`.
    Ed25519,
}

impl KeyKind {
    /// The prefix shared by every ECDSA format identifier.
    pub const ECDSA_PREFIX: &'static str = "ecdsa-sha2-";

    /// The format identifier of this kind, or its prefix for [`KeyKind::Ecdsa`].
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Dss => "ssh-dss",
            Self::Rsa => "ssh-rsa",
            Self::Ecdsa => Self::ECDSA_PREFIX,
            Self::Ed25519 => "ssh-ed25519",
        }
    }

    /// Whether `format` is a format identifier of this kind.
    pub fn matches(&self, format: &str) -> bool {
        match self {
            Self::Ecdsa => format.starts_with(Self::ECDSA_PREFIX),
            _ => format == self.expected(),
        }
    }

    /// Find the kind `format` is an identifier of.
    pub fn of(format: &str) -> Option<Self> {
        [Self::Dss, Self::Rsa, Self::Ecdsa, Self::Ed25519]
            .into_iter()
            .find(|kind| kind.matches(format))
    }
}

impl From<HostKey> for KeyKind {
    fn from(value: HostKey) -> Self {
        match value {
            HostKey::Ed25519 => Self::Ed25519,
            HostKey::EcdsaNistp256 | HostKey::EcdsaNistp384 | HostKey::EcdsaNistp521 => {
                Self::Ecdsa
            }
            HostKey::Rsa => Self::Rsa,
            HostKey::Dss => Self::Dss,
        }
    }
}

/// Whether `curve` can stand as the suffix of an ECDSA format identifier.
fn is_valid_curve(curve: &str) -> bool {
    !curve.is_empty() && curve.bytes().all(|byte| byte.is_ascii_graphic() && byte != b',')
}

/// Read the format identifier, validating it against `expected` if provided.
fn read_format(
    reader: &mut impl Reader,
    expected: Option<KeyKind>,
    malformed: fn(Malformed) -> Error,
) -> Result<(KeyKind, String)> {
    let format = String::decode(reader).map_err(|err| truncated(err.into(), malformed))?;

    match expected {
        Some(kind) if kind.matches(&format) => Ok((kind, format)),
        Some(kind) => Err(malformed(Malformed::Format {
            expected: kind.expected(),
            found: format,
        })),
        None => match KeyKind::of(&format) {
            Some(kind) => Ok((kind, format)),
            None => Err(malformed(Malformed::UnknownFormat(format))),
        },
    }
}

/// Report failures of the wire primitives as a malformed blob, leaving other errors untouched.
fn truncated(error: Error, malformed: fn(Malformed) -> Error) -> Error {
    match error {
        Error::Encoding(_) | Error::Key(_) => malformed(Malformed::Payload),
        error => error,
    }
}

/// Ensure the whole of `reader` was consumed.
fn finish(reader: &[u8], malformed: fn(Malformed) -> Error) -> Result<()> {
    if reader.is_empty() {
        Ok(())
    } else {
        Err(malformed(Malformed::TrailingData {
            remaining: reader.len(),
        }))
    }
}
