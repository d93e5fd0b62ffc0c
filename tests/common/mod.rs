#![allow(dead_code, clippy::unwrap_used)]

use assh_algo::Result;
use ssh_encoding::{Reader, Writer};
use ssh_key::Mpint;

use assh_algo::codec::MpintCodec;

/// Length-prefix `bytes` the way the wire `string` does.
pub fn string(bytes: impl AsRef<[u8]>) -> Vec<u8> {
    let bytes = bytes.as_ref();
    let mut buffer = (bytes.len() as u32).to_be_bytes().to_vec();
    buffer.extend_from_slice(bytes);

    buffer
}

/// Concatenate wire fields.
pub fn blob<const N: usize>(fields: [Vec<u8>; N]) -> Vec<u8> {
    fields.concat()
}

pub fn mpint(bytes: &[u8]) -> Mpint {
    Mpint::from_positive_bytes(bytes).unwrap()
}

/// A component of `len` bytes, its most significant bit set.
pub fn wide(len: usize, fill: u8) -> Vec<u8> {
    let mut bytes = vec![fill; len];
    if let Some(first) = bytes.first_mut() {
        *first |= 0x80;
    }

    bytes
}

/// Integers prefixed with a single length byte rather than four.
#[derive(Debug, Default)]
pub struct ShortMpint;

impl MpintCodec for ShortMpint {
    fn encoded_len(&self, value: &Mpint) -> Result<usize> {
        Ok(1 + value.as_bytes().len())
    }

    fn encode(&self, value: &Mpint, writer: &mut impl Writer) -> Result<()> {
        let bytes = value.as_bytes();

        writer.write(&[bytes.len() as u8])?;
        writer.write(bytes)?;

        Ok(())
    }

    fn decode(&self, reader: &mut impl Reader) -> Result<Mpint> {
        let mut len = [0u8; 1];
        reader.read(&mut len)?;

        let mut bytes = vec![0u8; usize::from(len[0])];
        reader.read(&mut bytes)?;

        Ok(Mpint::from_bytes(&bytes)?)
    }
}
