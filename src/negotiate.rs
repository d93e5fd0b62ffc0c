//! Selection of a single algorithm from a peer's `name-list`.

use std::collections::HashSet;

use crate::{
    algorithm::{Algorithm, AlgorithmId, Category, PriorityList},
    Error, Result,
};

/// A borrowed comma-separated `name-list`, as found in the `SSH_MSG_KEXINIT` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameList<'s>(&'s str);

impl<'s> NameList<'s> {
    /// Wrap a comma-separated list of names.
    pub fn new(csv: &'s str) -> Self {
        Self(csv)
    }

    /// Iterate over the names, in the order of the list.
    ///
    /// Names are not trimmed and an empty list yields a single empty name.
    pub fn iter(&self) -> impl Iterator<Item = &'s str> {
        self.0.split(',')
    }

    /// Collect the names in a set, collapsing duplicates.
    pub fn to_set(&self) -> HashSet<&'s str> {
        self.iter().collect()
    }

    /// The underlying comma-separated list.
    pub fn as_str(&self) -> &'s str {
        self.0
    }
}

/// Select the first algorithm of `local` that is also present in the `remote` name-list.
///
/// Preference is solely driven by the order of `local`, the order of `remote`
/// being irrelevant; [`AlgorithmId::UNKNOWN`] is returned when there is no overlap.
pub fn negotiate<A: Algorithm>(local: &PriorityList<A>, remote: &str) -> AlgorithmId {
    let names = NameList::new(remote).to_set();

    match local.iter().find(|algorithm| names.contains(algorithm.name())) {
        Some(algorithm) => {
            tracing::debug!(
                "Negotiated {} algorithm `{}`",
                A::CATEGORY,
                algorithm.name()
            );

            algorithm.id()
        }
        None => {
            tracing::debug!(
                "No common {} algorithm between `{local}` and `{remote}`",
                A::CATEGORY
            );

            AlgorithmId::UNKNOWN
        }
    }
}

/// Negotiate an [`Algorithm`], mapping the absence of overlap to its category's fatal error.
pub trait Negotiate: Algorithm {
    /// The error when no common algorithm is found.
    const ERR: Error;

    /// Negotiate the `remote` name-list against this category's full priority list.
    fn negotiate(remote: &str) -> Result<Self> {
        Self::negotiate_after(remote, AlgorithmId::UNKNOWN)
    }

    /// Negotiate the `remote` name-list against this category's priority list, skipping ids up to `start_after`.
    fn negotiate_after(remote: &str, start_after: AlgorithmId) -> Result<Self> {
        let registry = Self::registry();

        registry
            .get(registry.preference_intersect(remote, start_after))
            .ok_or(Self::ERR)
    }
}

impl<A: Algorithm> Negotiate for A {
    const ERR: Error = match A::CATEGORY {
        Category::HostKey => Error::NoCommonKey,
        Category::Kex => Error::NoCommonKex,
        Category::Cipher => Error::NoCommonCipher,
        Category::Hmac => Error::NoCommonHmac,
        Category::Compress => Error::NoCommonCompression,
    };
}

#[cfg(test)]
mod tests;
