use ssh_encoding::{Decode, Encode, Reader, Writer};
use ssh_key::Mpint;

use crate::Result;

/// A codec for the arbitrary-precision integers embedded in blobs.
pub trait MpintCodec {
    /// Length of `value` once encoded, length prefix included.
    fn encoded_len(&self, value: &Mpint) -> Result<usize>;

    /// Encode `value` to the `writer`.
    fn encode(&self, value: &Mpint, writer: &mut impl Writer) -> Result<()>;

    /// Decode an integer from the `reader`.
    fn decode(&self, reader: &mut impl Reader) -> Result<Mpint>;
}

/// The canonical `mpint` encoding: a length-prefixed, minimal, two's-complement big-endian integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical;

impl MpintCodec for Canonical {
    fn encoded_len(&self, value: &Mpint) -> Result<usize> {
        Ok(value.encoded_len()?)
    }

    fn encode(&self, value: &Mpint, writer: &mut impl Writer) -> Result<()> {
        Ok(value.encode(writer)?)
    }

    fn decode(&self, reader: &mut impl Reader) -> Result<Mpint> {
        Ok(Mpint::decode(reader)?)
    }
}
