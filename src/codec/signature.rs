use std::borrow::Cow;

use ssh_encoding::{CheckedSum, Decode, Encode, Reader, Writer};
use ssh_key::Mpint;

use super::{finish, is_valid_curve, read_format, truncated, Canonical, KeyKind, MpintCodec};
use crate::{algorithm::HostKey, Error, Malformed, Result};

/// Width of each of the `r` and `s` components of a DSA signature, in bytes.
pub const DSS_COMPONENT_SIZE: usize = 20;

/// A DSA signature.
///
/// On the wire, `r` and `s` are fixed-width big-endian integers rather than `mpint`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DssSignature {
    r: Mpint,
    s: Mpint,
}

impl DssSignature {
    /// Create a signature from its `r` and `s` components.
    pub fn new(r: Mpint, s: Mpint) -> Self {
        Self { r, s }
    }

    /// Create a signature from its fixed-width `r` and `s` components.
    pub fn from_components(
        r: &[u8; DSS_COMPONENT_SIZE],
        s: &[u8; DSS_COMPONENT_SIZE],
    ) -> Result<Self> {
        Ok(Self {
            r: Mpint::from_positive_bytes(r)?,
            s: Mpint::from_positive_bytes(s)?,
        })
    }

    /// The `r` component.
    pub fn r(&self) -> &Mpint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Mpint {
        &self.s
    }
}

/// A RSA signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaSignature {
    blob: Vec<u8>,
}

impl RsaSignature {
    /// Create a signature from its raw bytes.
    pub fn new(blob: impl Into<Vec<u8>>) -> Self {
        Self { blob: blob.into() }
    }

    /// The raw signature bytes.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }
}

/// An ECDSA signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaSignature {
    curve: String,
    r: Mpint,
    s: Mpint,
}

impl EcdsaSignature {
    /// Create a signature over `curve` from its `r` and `s` components.
    ///
    /// The curve identifier must be printable ASCII, without commas.
    pub fn new(curve: impl Into<String>, r: Mpint, s: Mpint) -> Result<Self> {
        let curve = curve.into();

        if !is_valid_curve(&curve) {
            return Err(Error::MalformedSignature(Malformed::Curve {
                format: format!("{}{curve}", KeyKind::ECDSA_PREFIX),
                curve,
            }));
        }

        Ok(Self { curve, r, s })
    }

    /// The curve identifier, such as `nistp256`.
    pub fn curve(&self) -> &str {
        &self.curve
    }

    /// The `r` component.
    pub fn r(&self) -> &Mpint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Mpint {
        &self.s
    }
}

/// An Ed25519 signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519Signature {
    blob: Vec<u8>,
}

impl Ed25519Signature {
    /// Create a signature from its raw bytes, conventionally 64 of them.
    pub fn new(blob: impl Into<Vec<u8>>) -> Self {
        Self { blob: blob.into() }
    }

    /// The raw signature bytes.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }
}

/// A signature, as found in signature blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureMaterial {
    /// DSA signature.
    Dss(DssSignature),

    /// RSA signature.
    Rsa(RsaSignature),

    /// ECDSA signature.
    Ecdsa(EcdsaSignature),

    /// Ed25519 signature.
    Ed25519(Ed25519Signature),
}

impl SignatureMaterial {
    /// The kind of this signature.
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Dss(_) => KeyKind::Dss,
            Self::Rsa(_) => KeyKind::Rsa,
            Self::Ecdsa(_) => KeyKind::Ecdsa,
            Self::Ed25519(_) => KeyKind::Ed25519,
        }
    }

    /// The format identifier, computed from the signature's fields.
    pub fn format(&self) -> Cow<'static, str> {
        match self {
            Self::Ecdsa(signature) => {
                format!("{}{}", KeyKind::ECDSA_PREFIX, signature.curve).into()
            }
            _ => self.kind().expected().into(),
        }
    }

    /// The host key algorithm this signature was produced with, if registered.
    pub fn host_key(&self) -> Option<HostKey> {
        match self {
            Self::Dss(_) => Some(HostKey::Dss),
            Self::Rsa(_) => Some(HostKey::Rsa),
            Self::Ecdsa(signature) => HostKey::from_curve(&signature.curve),
            Self::Ed25519(_) => Some(HostKey::Ed25519),
        }
    }
}

impl From<DssSignature> for SignatureMaterial {
    fn from(value: DssSignature) -> Self {
        Self::Dss(value)
    }
}

impl From<RsaSignature> for SignatureMaterial {
    fn from(value: RsaSignature) -> Self {
        Self::Rsa(value)
    }
}

impl From<EcdsaSignature> for SignatureMaterial {
    fn from(value: EcdsaSignature) -> Self {
        Self::Ecdsa(value)
    }
}

impl From<Ed25519Signature> for SignatureMaterial {
    fn from(value: Ed25519Signature) -> Self {
        Self::Ed25519(value)
    }
}

/// The fixed-width big-endian representation of a DSA signature component.
fn fixed<'v>(field: &'static str, value: &'v Mpint) -> Result<&'v [u8]> {
    match value.as_positive_bytes() {
        Some(bytes) if bytes.len() == DSS_COMPONENT_SIZE => Ok(bytes),
        bytes => Err(Error::Invariant {
            field,
            len: bytes.map_or(value.as_bytes().len(), <[u8]>::len),
            expected: DSS_COMPONENT_SIZE,
        }),
    }
}

/// Encoder and decoder of signature blobs.
#[derive(Debug, Clone, Default)]
pub struct SignatureCodec<C = Canonical> {
    mpint: C,
}

impl SignatureCodec {
    /// Create a codec using the [`Canonical`] integer encoding.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: MpintCodec> SignatureCodec<C> {
    /// Create a codec using a custom integer encoding.
    pub fn with_mpint(mpint: C) -> Self {
        Self { mpint }
    }

    /// Decode a signature blob of any kind, dispatching on its format identifier.
    pub fn decode(&self, reader: &mut impl Reader) -> Result<SignatureMaterial> {
        let (kind, format) = read_format(reader, None, Error::MalformedSignature)?;

        self.decode_payload(kind, format, reader)
    }

    /// Decode a signature blob, failing if its format identifier isn't of the `kind`.
    pub fn decode_as(
        &self,
        kind: KeyKind,
        reader: &mut impl Reader,
    ) -> Result<SignatureMaterial> {
        let (kind, format) = read_format(reader, Some(kind), Error::MalformedSignature)?;

        self.decode_payload(kind, format, reader)
    }

    /// Decode a signature blob spanning the whole of `bytes`.
    pub fn from_bytes(&self, mut bytes: &[u8]) -> Result<SignatureMaterial> {
        let signature = self.decode(&mut bytes)?;
        finish(bytes, Error::MalformedSignature)?;

        Ok(signature)
    }

    fn decode_payload(
        &self,
        kind: KeyKind,
        format: String,
        reader: &mut impl Reader,
    ) -> Result<SignatureMaterial> {
        tracing::trace!("Decoding a `{format}` signature blob");

        let payload = Vec::<u8>::decode(reader)
            .map_err(|err| truncated(err.into(), Error::MalformedSignature))?;

        let signature = match kind {
            KeyKind::Dss => {
                if payload.len() != DSS_COMPONENT_SIZE * 2 {
                    return Err(Error::MalformedSignature(Malformed::Length {
                        expected: DSS_COMPONENT_SIZE * 2,
                        found: payload.len(),
                    }));
                }

                let (r, s) = payload.split_at(DSS_COMPONENT_SIZE);

                DssSignature::new(Mpint::from_positive_bytes(r)?, Mpint::from_positive_bytes(s)?)
                    .into()
            }
            KeyKind::Rsa => RsaSignature::new(payload).into(),
            KeyKind::Ecdsa => {
                let mut inner = payload.as_slice();
                let (r, s) = self.decode_components(&mut inner)?;
                finish(inner, Error::MalformedSignature)?;

                let curve = format
                    .strip_prefix(KeyKind::ECDSA_PREFIX)
                    .unwrap_or_default();

                EcdsaSignature::new(curve, r, s)?.into()
            }
            KeyKind::Ed25519 => Ed25519Signature::new(payload).into(),
        };

        Ok(signature)
    }

    fn decode_components(&self, inner: &mut &[u8]) -> Result<(Mpint, Mpint)> {
        let r = self.mpint.decode(inner);
        let s = self.mpint.decode(inner);

        match (r, s) {
            (Ok(r), Ok(s)) => Ok((r, s)),
            _ => Err(Error::MalformedSignature(Malformed::Payload)),
        }
    }

    fn components_len(&self, r: &Mpint, s: &Mpint) -> Result<usize> {
        Ok([self.mpint.encoded_len(r)?, self.mpint.encoded_len(s)?].checked_sum()?)
    }

    /// Length of the encoded `signature`, as produced by [`SignatureCodec::encode`].
    pub fn encoded_len(&self, signature: &SignatureMaterial) -> Result<usize> {
        let format = signature.format().as_bytes().encoded_len()?;

        let payload = match signature {
            SignatureMaterial::Dss(_) => DSS_COMPONENT_SIZE * 2,
            SignatureMaterial::Rsa(RsaSignature { blob })
            | SignatureMaterial::Ed25519(Ed25519Signature { blob }) => blob.len(),
            SignatureMaterial::Ecdsa(EcdsaSignature { r, s, .. }) => self.components_len(r, s)?,
        };

        Ok([format, 4, payload].checked_sum()?)
    }

    /// Encode the `signature` to the `writer`.
    ///
    /// DSA components whose natural encoding isn't exactly [`DSS_COMPONENT_SIZE`] bytes
    /// are rejected with [`Error::Invariant`].
    pub fn encode(&self, signature: &SignatureMaterial, writer: &mut impl Writer) -> Result<()> {
        match signature {
            SignatureMaterial::Dss(DssSignature { r, s }) => {
                let payload = [fixed("r", r)?, fixed("s", s)?].concat();

                signature.format().as_bytes().encode(writer)?;
                payload.encode(writer)?;
            }
            SignatureMaterial::Rsa(RsaSignature { blob })
            | SignatureMaterial::Ed25519(Ed25519Signature { blob }) => {
                signature.format().as_bytes().encode(writer)?;
                blob.encode(writer)?;
            }
            SignatureMaterial::Ecdsa(EcdsaSignature { r, s, .. }) => {
                let len = u32::try_from(self.components_len(r, s)?)
                    .map_err(|_| ssh_encoding::Error::Length)?;

                signature.format().as_bytes().encode(writer)?;
                len.encode(writer)?;
                self.mpint.encode(r, writer)?;
                self.mpint.encode(s, writer)?;
            }
        }

        Ok(())
    }

    /// Encode the `signature` to a buffer sized with [`SignatureCodec::encoded_len`].
    pub fn to_bytes(&self, signature: &SignatureMaterial) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_len(signature)?);
        self.encode(signature, &mut buffer)?;

        Ok(buffer)
    }
}
