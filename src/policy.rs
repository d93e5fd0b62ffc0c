//! Local restrictions over the algorithms offered during negotiation.

use std::collections::HashSet;

use crate::{
    algorithm::{Algorithm, AlgorithmId, Category, Cipher, HostKey, Hmac, Kex, PriorityList},
    negotiate,
};

/// A negotiation policy, disabling some of the registered algorithms.
///
/// The default policy supports every registered algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    disabled: HashSet<(Category, AlgorithmId)>,
}

impl Policy {
    /// A policy disabling the algorithms relying on deprecated primitives
    /// (DSA keys, sha-1 key-exchanges, TripleDES and md5).
    pub fn modern() -> Self {
        Self::default()
            .with_disabled(HostKey::Dss)
            .with_disabled(Kex::DiffieHellmanGroupExchangeSha1)
            .with_disabled(Kex::DiffieHellmanGroup14Sha1)
            .with_disabled(Kex::DiffieHellmanGroup1Sha1)
            .with_disabled(Cipher::TDesCbc)
            .with_disabled(Hmac::HmacMd5ETM)
            .with_disabled(Hmac::HmacMd5)
    }

    /// Disable `algorithm` from negotiation.
    pub fn disable<A: Algorithm>(&mut self, algorithm: A) -> &mut Self {
        self.disabled.insert((A::CATEGORY, algorithm.id()));
        self
    }

    /// Enable back `algorithm` for negotiation.
    pub fn enable<A: Algorithm>(&mut self, algorithm: A) -> &mut Self {
        self.disabled.remove(&(A::CATEGORY, algorithm.id()));
        self
    }

    /// Disable `algorithm` from negotiation, by value.
    pub fn with_disabled<A: Algorithm>(mut self, algorithm: A) -> Self {
        self.disable(algorithm);
        self
    }

    /// Whether `id` is registered, supported and not disabled by this policy.
    pub fn is_supported<A: Algorithm>(&self, id: AlgorithmId) -> bool {
        A::registry().is_supported(id) && !self.disabled.contains(&(A::CATEGORY, id))
    }

    /// The registry's priority list, without the algorithms disabled by this policy.
    pub fn priority_list<A: Algorithm>(&self, start_after: AlgorithmId) -> PriorityList<A> {
        A::registry()
            .priority_list(start_after)
            .iter()
            .filter(|algorithm| self.is_supported::<A>(algorithm.id()))
            .collect()
    }

    /// Negotiate the `remote` name-list against [`Policy::priority_list`].
    pub fn preference_intersect<A: Algorithm>(
        &self,
        remote: &str,
        start_after: AlgorithmId,
    ) -> AlgorithmId {
        negotiate::negotiate(&self.priority_list::<A>(start_after), remote)
    }
}
