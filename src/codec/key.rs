use std::borrow::Cow;

use ssh_encoding::{CheckedSum, Decode, Encode, Reader, Writer};
use ssh_key::Mpint;

use super::{finish, is_valid_curve, read_format, truncated, Canonical, KeyKind, MpintCodec};
use crate::{algorithm::HostKey, Error, Malformed, Result};

/// A DSA public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DssKey {
    p: Mpint,
    q: Mpint,
    g: Mpint,
    y: Mpint,
}

impl DssKey {
    /// Create a key from its domain parameters `p`, `q`, `g` and public component `y`.
    pub fn new(p: Mpint, q: Mpint, g: Mpint, y: Mpint) -> Self {
        Self { p, q, g, y }
    }

    /// The prime modulus.
    pub fn p(&self) -> &Mpint {
        &self.p
    }

    /// The prime divisor of `p - 1`.
    pub fn q(&self) -> &Mpint {
        &self.q
    }

    /// The generator.
    pub fn g(&self) -> &Mpint {
        &self.g
    }

    /// The public component.
    pub fn y(&self) -> &Mpint {
        &self.y
    }
}

/// A RSA public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    e: Mpint,
    n: Mpint,
}

impl RsaKey {
    /// Create a key from its public exponent `e` and modulus `n`.
    pub fn new(e: Mpint, n: Mpint) -> Self {
        Self { e, n }
    }

    /// The public exponent.
    pub fn e(&self) -> &Mpint {
        &self.e
    }

    /// The modulus.
    pub fn n(&self) -> &Mpint {
        &self.n
    }
}

/// An ECDSA public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaKey {
    curve: String,
    q: Vec<u8>,
}

impl EcdsaKey {
    /// Create a key from its `curve` identifier and encoded point `q`.
    ///
    /// The curve identifier must be printable ASCII, without commas.
    pub fn new(curve: impl Into<String>, q: impl Into<Vec<u8>>) -> Result<Self> {
        let curve = curve.into();

        if !is_valid_curve(&curve) {
            return Err(Error::MalformedKey(Malformed::Curve {
                format: format!("{}{curve}", KeyKind::ECDSA_PREFIX),
                curve,
            }));
        }

        Ok(Self {
            curve,
            q: q.into(),
        })
    }

    /// The curve identifier, such as `nistp256`.
    pub fn curve(&self) -> &str {
        &self.curve
    }

    /// The encoded curve point.
    pub fn q(&self) -> &[u8] {
        &self.q
    }
}

/// An Ed25519 public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519Key {
    key: Vec<u8>,
}

impl Ed25519Key {
    /// Create a key from its raw bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// The raw key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

/// A public key, as found in host key blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// DSA key.
    Dss(DssKey),

    /// RSA key.
    Rsa(RsaKey),

    /// ECDSA key.
    Ecdsa(EcdsaKey),

    /// Ed25519 key.
    Ed25519(Ed25519Key),
}

impl KeyMaterial {
    /// The kind of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Dss(_) => KeyKind::Dss,
            Self::Rsa(_) => KeyKind::Rsa,
            Self::Ecdsa(_) => KeyKind::Ecdsa,
            Self::Ed25519(_) => KeyKind::Ed25519,
        }
    }

    /// The format identifier, computed from the key's fields.
    pub fn format(&self) -> Cow<'static, str> {
        match self {
            Self::Ecdsa(key) => format!("{}{}", KeyKind::ECDSA_PREFIX, key.curve).into(),
            _ => self.kind().expected().into(),
        }
    }

    /// The host key algorithm of this key, if registered.
    pub fn host_key(&self) -> Option<HostKey> {
        match self {
            Self::Dss(_) => Some(HostKey::Dss),
            Self::Rsa(_) => Some(HostKey::Rsa),
            Self::Ecdsa(key) => HostKey::from_curve(&key.curve),
            Self::Ed25519(_) => Some(HostKey::Ed25519),
        }
    }
}

impl From<DssKey> for KeyMaterial {
    fn from(value: DssKey) -> Self {
        Self::Dss(value)
    }
}

impl From<RsaKey> for KeyMaterial {
    fn from(value: RsaKey) -> Self {
        Self::Rsa(value)
    }
}

impl From<EcdsaKey> for KeyMaterial {
    fn from(value: EcdsaKey) -> Self {
        Self::Ecdsa(value)
    }
}

impl From<Ed25519Key> for KeyMaterial {
    fn from(value: Ed25519Key) -> Self {
        Self::Ed25519(value)
    }
}

/// Encoder and decoder of public key blobs.
#[derive(Debug, Clone, Default)]
pub struct KeyCodec<C = Canonical> {
    mpint: C,
}

impl KeyCodec {
    /// Create a codec using the [`Canonical`] integer encoding.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: MpintCodec> KeyCodec<C> {
    /// Create a codec using a custom integer encoding.
    pub fn with_mpint(mpint: C) -> Self {
        Self { mpint }
    }

    /// Decode a key blob of any kind, dispatching on its format identifier.
    pub fn decode(&self, reader: &mut impl Reader) -> Result<KeyMaterial> {
        let (kind, format) = read_format(reader, None, Error::MalformedKey)?;

        self.decode_fields(kind, format, reader)
    }

    /// Decode a key blob, failing if its format identifier isn't of the `kind`.
    pub fn decode_as(&self, kind: KeyKind, reader: &mut impl Reader) -> Result<KeyMaterial> {
        let (kind, format) = read_format(reader, Some(kind), Error::MalformedKey)?;

        self.decode_fields(kind, format, reader)
    }

    /// Decode a key blob spanning the whole of `bytes`.
    pub fn from_bytes(&self, mut bytes: &[u8]) -> Result<KeyMaterial> {
        let key = self.decode(&mut bytes)?;
        finish(bytes, Error::MalformedKey)?;

        Ok(key)
    }

    fn decode_fields(
        &self,
        kind: KeyKind,
        format: String,
        reader: &mut impl Reader,
    ) -> Result<KeyMaterial> {
        tracing::trace!("Decoding a `{format}` public key blob");

        self.read_fields(kind, format, reader)
            .map_err(|err| truncated(err, Error::MalformedKey))
    }

    fn read_fields(
        &self,
        kind: KeyKind,
        format: String,
        reader: &mut impl Reader,
    ) -> Result<KeyMaterial> {
        let key = match kind {
            KeyKind::Dss => DssKey {
                p: self.mpint.decode(reader)?,
                q: self.mpint.decode(reader)?,
                g: self.mpint.decode(reader)?,
                y: self.mpint.decode(reader)?,
            }
            .into(),
            KeyKind::Rsa => RsaKey {
                e: self.mpint.decode(reader)?,
                n: self.mpint.decode(reader)?,
            }
            .into(),
            KeyKind::Ecdsa => {
                let curve = String::decode(reader)?;

                if format.strip_prefix(KeyKind::ECDSA_PREFIX) != Some(curve.as_str()) {
                    return Err(Error::MalformedKey(Malformed::Curve { format, curve }));
                }

                EcdsaKey::new(curve, Vec::<u8>::decode(reader)?)?.into()
            }
            KeyKind::Ed25519 => Ed25519Key::new(Vec::<u8>::decode(reader)?).into(),
        };

        Ok(key)
    }

    /// Length of the encoded `key`, as produced by [`KeyCodec::encode`].
    pub fn encoded_len(&self, key: &KeyMaterial) -> Result<usize> {
        let format = key.format().as_bytes().encoded_len()?;

        let fields = match key {
            KeyMaterial::Dss(DssKey { p, q, g, y }) => [
                self.mpint.encoded_len(p)?,
                self.mpint.encoded_len(q)?,
                self.mpint.encoded_len(g)?,
                self.mpint.encoded_len(y)?,
            ]
            .checked_sum()?,
            KeyMaterial::Rsa(RsaKey { e, n }) => {
                [self.mpint.encoded_len(e)?, self.mpint.encoded_len(n)?].checked_sum()?
            }
            KeyMaterial::Ecdsa(EcdsaKey { curve, q }) => {
                [curve.encoded_len()?, q.encoded_len()?].checked_sum()?
            }
            KeyMaterial::Ed25519(Ed25519Key { key }) => key.encoded_len()?,
        };

        Ok([format, fields].checked_sum()?)
    }

    /// Encode the `key` to the `writer`.
    pub fn encode(&self, key: &KeyMaterial, writer: &mut impl Writer) -> Result<()> {
        key.format().as_bytes().encode(writer)?;

        match key {
            KeyMaterial::Dss(DssKey { p, q, g, y }) => {
                self.mpint.encode(p, writer)?;
                self.mpint.encode(q, writer)?;
                self.mpint.encode(g, writer)?;
                self.mpint.encode(y, writer)?;
            }
            KeyMaterial::Rsa(RsaKey { e, n }) => {
                self.mpint.encode(e, writer)?;
                self.mpint.encode(n, writer)?;
            }
            KeyMaterial::Ecdsa(EcdsaKey { curve, q }) => {
                curve.encode(writer)?;
                q.encode(writer)?;
            }
            KeyMaterial::Ed25519(Ed25519Key { key }) => {
                key.encode(writer)?;
            }
        }

        Ok(())
    }

    /// Encode the `key` to a buffer sized with [`KeyCodec::encoded_len`].
    pub fn to_bytes(&self, key: &KeyMaterial) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_len(key)?);
        self.encode(key, &mut buffer)?;

        Ok(buffer)
    }
}
