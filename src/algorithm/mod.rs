//! Supported algorithms for **compression**, **encryption**, **host keys**, **integrity** and **key-exchange**.
//!
//! Every category is a fieldless enum whose discriminant is the algorithm's wire-independent
//! [`AlgorithmId`], dense from `1`. Declaration order is preference order: the lower the id,
//! the more preferred the algorithm is during negotiation.

use std::{collections::HashMap, fmt, hash::Hash};

use strum::IntoEnumIterator;

use crate::negotiate;

/// Implement [`Algorithm`] for a `#[repr(u8)]` category enum deriving [`strum::FromRepr`].
macro_rules! algorithm {
    ($ty:ty, $category:expr) => {
        impl $crate::algorithm::Algorithm for $ty {
            const CATEGORY: $crate::algorithm::Category = $category;

            fn id(self) -> $crate::algorithm::AlgorithmId {
                $crate::algorithm::AlgorithmId(self as u8)
            }

            fn from_id(id: $crate::algorithm::AlgorithmId) -> Option<Self> {
                Self::from_repr(id.0)
            }

            fn registry() -> &'static $crate::algorithm::Registry<Self> {
                static REGISTRY: std::sync::OnceLock<$crate::algorithm::Registry<$ty>> =
                    std::sync::OnceLock::new();

                REGISTRY.get_or_init($crate::algorithm::Registry::build)
            }
        }
    };
}

mod cipher;
pub use cipher::Cipher;

mod compress;
pub use compress::Compress;

mod hmac;
pub use hmac::Hmac;

mod kex;
pub use kex::Kex;

mod key;
pub use key::HostKey;


/// Identifier of an algorithm inside its [`Category`].
///
/// The `0` value is the [`AlgorithmId::UNKNOWN`] sentinel, returned for unrecognized
/// names and when negotiation finds no common algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlgorithmId(u8);

impl AlgorithmId {
    /// The sentinel for unknown or unnegotiated algorithms.
    pub const UNKNOWN: Self = Self(0);

    /// Wrap a raw identifier.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this is the [`AlgorithmId::UNKNOWN`] sentinel.
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for AlgorithmId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The independent id spaces negotiated during the key-exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Category {
    /// Server host key algorithms.
    #[strum(serialize = "host key")]
    HostKey,

    /// Key-exchange methods.
    #[strum(serialize = "key-exchange")]
    Kex,

    /// Encryption algorithms.
    #[strum(serialize = "encryption")]
    Cipher,

    /// Message authentication algorithms.
    #[strum(serialize = "mac")]
    Hmac,

    /// Compression methods.
    #[strum(serialize = "compression")]
    Compress,
}

/// Hash functions that key-exchange methods and MACs are built upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Digest {
    /// MD5.
    Md5,

    /// SHA-1.
    Sha1,

    /// SHA-2 with a 256-bit output.
    Sha256,

    /// SHA-2 with a 384-bit output.
    Sha384,

    /// SHA-2 with a 512-bit output.
    Sha512,
}

impl Digest {
    /// Size of the digest output, in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// An algorithm of a given [`Category`], with its statically assigned id and name.
pub trait Algorithm:
    Copy + Eq + Hash + fmt::Debug + IntoEnumIterator + Into<&'static str> + Send + Sync + 'static
{
    /// The category of this algorithm.
    const CATEGORY: Category;

    /// The identifier of the algorithm.
    fn id(self) -> AlgorithmId;

    /// Lookup an algorithm from it's identifier.
    fn from_id(id: AlgorithmId) -> Option<Self>;

    /// The protocol name of the algorithm.
    fn name(self) -> &'static str {
        self.into()
    }

    /// Whether the algorithm participates in negotiation.
    fn is_supported(self) -> bool {
        true
    }

    /// The lookup tables for this category.
    fn registry() -> &'static Registry<Self>;
}

/// Bidirectional lookup tables between [`AlgorithmId`]s and protocol names of a [`Category`].
#[derive(Debug)]
pub struct Registry<A> {
    table: Box<[A]>,
    names: HashMap<&'static str, A>,
}

impl<A: Algorithm> Registry<A> {
    fn build() -> Self {
        let table: Box<[A]> = A::iter().collect();

        debug_assert!(
            table
                .iter()
                .enumerate()
                .all(|(index, algorithm)| usize::from(algorithm.id().get()) == index + 1),
            "The {} id space is not dense",
            A::CATEGORY
        );

        let names = table
            .iter()
            .map(|algorithm| (algorithm.name(), *algorithm))
            .collect();

        tracing::trace!(
            "Built the {} registry with {} algorithms",
            A::CATEGORY,
            table.len()
        );

        Self { table, names }
    }

    /// The highest identifier of this category.
    pub fn end(&self) -> AlgorithmId {
        self.table
            .last()
            .map_or(AlgorithmId::UNKNOWN, |algorithm| algorithm.id())
    }

    /// Lookup the algorithm at `id`, if in range.
    pub fn get(&self, id: AlgorithmId) -> Option<A> {
        usize::from(id.get())
            .checked_sub(1)
            .and_then(|index| self.table.get(index))
            .copied()
    }

    /// Lookup the algorithm named `name`, if any.
    pub fn find(&self, name: &str) -> Option<A> {
        self.names.get(name).copied()
    }

    /// The identifier for `name`, or [`AlgorithmId::UNKNOWN`] when not an exact match.
    pub fn id_of(&self, name: &str) -> AlgorithmId {
        self.find(name)
            .map_or(AlgorithmId::UNKNOWN, |algorithm| algorithm.id())
    }

    /// The name for `id`, or the empty string when out of range.
    pub fn name_of(&self, id: AlgorithmId) -> &'static str {
        self.get(id).map_or("", A::name)
    }

    /// Whether `id` is in range and allowed to participate in negotiation.
    pub fn is_supported(&self, id: AlgorithmId) -> bool {
        self.get(id).is_some_and(A::is_supported)
    }

    /// Iterate over the algorithms of this category, by ascending id.
    pub fn iter(&self) -> impl Iterator<Item = A> + '_ {
        self.table.iter().copied()
    }

    /// Build the preference-ordered list of supported algorithms with an id strictly above `start_after`.
    ///
    /// Since ids ascend with decreasing preference, `start_after` skips the _most preferred_ entries.
    pub fn priority_list(&self, start_after: AlgorithmId) -> PriorityList<A> {
        self.iter()
            .filter(|algorithm| algorithm.id() > start_after && algorithm.is_supported())
            .collect()
    }

    /// Negotiate the `remote` name-list against [`Registry::priority_list`].
    pub fn preference_intersect(&self, remote: &str, start_after: AlgorithmId) -> AlgorithmId {
        negotiate::negotiate(&self.priority_list(start_after), remote)
    }
}

/// An ordered list of algorithms, most preferred first.
///
/// Displays as the comma-separated `name-list` of the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityList<A> {
    entries: Vec<A>,
}

impl<A: Algorithm> PriorityList<A> {
    /// Iterate over the entries, most preferred first.
    pub fn iter(&self) -> impl Iterator<Item = A> + '_ {
        self.entries.iter().copied()
    }

    /// Iterate over the entries' names, most preferred first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(A::name)
    }

    /// Count of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the list contains `algorithm`.
    pub fn contains(&self, algorithm: A) -> bool {
        self.entries.contains(&algorithm)
    }
}

impl<A: Algorithm> FromIterator<A> for PriorityList<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut entries = Vec::new();

        for algorithm in iter {
            if !entries.contains(&algorithm) {
                entries.push(algorithm);
            }
        }

        Self { entries }
    }
}

impl<A: Algorithm> fmt::Display for PriorityList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, name) in self.names().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }

        Ok(())
    }
}
