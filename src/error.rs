use thiserror::Error;

/// The error types that can occur when manipulating this crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// Binary (de)-serialization error from the wire primitives, while encoding.
    #[error(transparent)]
    Encoding(#[from] ssh_encoding::Error),

    /// Error from the `ssh-key` primitives, such as building an [`ssh_key::Mpint`].
    #[error(transparent)]
    Key(#[from] ssh_key::Error),

    /// The public key blob was rejected while decoding.
    #[error("Malformed public key blob: {0}")]
    MalformedKey(Malformed),

    /// The signature blob was rejected while decoding.
    #[error("Malformed signature blob: {0}")]
    MalformedSignature(Malformed),

    /// Locally-held material cannot be represented in its wire format.
    #[error("Field `{field}` spans {len} bytes, while exactly {expected} are required")]
    Invariant {
        /// Name of the offending field.
        field: &'static str,

        /// Length of the natural encoding of the field.
        len: usize,

        /// Length required by the wire format.
        expected: usize,
    },

    /// No common kex algorithm found between both sides.
    #[error("Unable to negotiate a common kex algorithm")]
    NoCommonKex,

    /// No common key algorithm found between both sides.
    #[error("Unable to negotiate a common host key algorithm")]
    NoCommonKey,

    /// No common cipher algorithm found between both sides.
    #[error("Unable to negotiate a common encryption algorithm")]
    NoCommonCipher,

    /// No common hmac algorithm found between both sides.
    #[error("Unable to negotiate a common HMAC algorithm")]
    NoCommonHmac,

    /// No common compression algorithm found between both sides.
    #[error("Unable to negotiate a common compression algorithm")]
    NoCommonCompression,

    /// Provided algorithm wasn't supported.
    #[error("Algorithm is unsupported")]
    UnsupportedAlgorithm,
}

/// Details on why a key or signature blob was rejected.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// The format identifier is not the one expected by the decoder.
    #[error("expected format `{expected}`, found `{found}`")]
    Format {
        /// The expected identifier, or prefix for ECDSA.
        expected: &'static str,

        /// The identifier read from the blob.
        found: String,
    },

    /// The format identifier matches none of the known variants.
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    /// The ECDSA curve identifier disagrees with the format identifier.
    #[error("curve `{curve}` does not match format `{format}`")]
    Curve {
        /// The format identifier read from the blob.
        format: String,

        /// The curve identifier read from the blob.
        curve: String,
    },

    /// A fixed-width payload has the wrong length.
    #[error("payload spans {found} bytes, expected {expected}")]
    Length {
        /// Required length.
        expected: usize,

        /// Actual length.
        found: usize,
    },

    /// Bytes were left over after the structured contents.
    #[error("{remaining} trailing bytes after the structured contents")]
    TrailingData {
        /// Count of unconsumed bytes.
        remaining: usize,
    },

    /// A field was truncated or not canonically encoded.
    #[error("field is truncated or not canonically encoded")]
    Payload,
}

/// A handy [`std::result::Result`] type alias bounding the [`enum@Error`] struct as `E`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
