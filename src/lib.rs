#![doc = concat!(
    "[![crates.io](https://img.shields.io/crates/v/", env!("CARGO_PKG_NAME"), ")](https://crates.io/crates/", env!("CARGO_PKG_NAME"), ")",
    " ",
    "[![docs.rs](https://img.shields.io/docsrs/", env!("CARGO_PKG_NAME"), ")](https://docs.rs/", env!("CARGO_PKG_NAME"), ")",
    " ",
    "![license](https://img.shields.io/crates/l/", env!("CARGO_PKG_NAME"), ")"
)]
#![doc = ""]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! ### Supported algorithms
//!
//! #### Key-exchange:
//! see [`algorithm::Kex`].
//!
//! #### Host keys:
//! see [`algorithm::HostKey`].
//!
//! #### Encryption:
//! see [`algorithm::Cipher`].
//!
//! #### MACs
//! see [`algorithm::Hmac`].
//!
//! #### Compression:
//! see [`algorithm::Compress`].
//!
//! ### Blobs
//!
//! Public keys and signatures are (de)-serialized with [`codec::KeyCodec`] and
//! [`codec::SignatureCodec`], for the `ssh-dss`, `ssh-rsa`, `ecdsa-sha2-*` and `ssh-ed25519` formats.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    clippy::unwrap_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,
    clippy::undocumented_unsafe_blocks
)]
#![forbid(unsafe_code)]

mod error;
pub use error::{Error, Malformed, Result};

pub mod algorithm;
pub mod codec;
pub mod negotiate;
pub mod policy;

pub use algorithm::{Algorithm, AlgorithmId, PriorityList, Registry};
pub use negotiate::{negotiate, Negotiate};
pub use policy::Policy;
