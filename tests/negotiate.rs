use assh_algo::{
    algorithm::{Compress, HostKey, Kex},
    negotiate, Algorithm, AlgorithmId, Error, Negotiate, Policy, PriorityList,
};

#[test_log::test]
fn host_key_from_kexinit() {
    let local = HostKey::registry().priority_list(AlgorithmId::UNKNOWN);

    assert_eq!(
        local.to_string(),
        "ssh-ed25519,ecdsa-sha2-nistp256,ecdsa-sha2-nistp384,ecdsa-sha2-nistp521,ssh-rsa,ssh-dss"
    );
    assert_eq!(
        local.names().collect::<Vec<_>>(),
        local.to_string().split(',').collect::<Vec<_>>()
    );
    assert_eq!(
        negotiate(&local, "ssh-rsa,ssh-ed25519"),
        HostKey::Ed25519.id()
    );
}

#[test_log::test]
fn disjoint_lists_are_fatal() {
    let local: PriorityList<HostKey> = [HostKey::Rsa, HostKey::Dss].into_iter().collect();

    assert!(negotiate(&local, "ssh-ed25519").is_unknown());
    assert!(matches!(
        Kex::negotiate("sntrup761x25519-sha512@openssh.com"),
        Err(Error::NoCommonKex)
    ));
}

#[test]
fn policy_restricts_negotiation() {
    let policy = Policy::default().with_disabled(Compress::None);
    let id = policy.preference_intersect::<Compress>("none,zlib", AlgorithmId::UNKNOWN);

    assert_eq!(Compress::from_id(id), Some(Compress::Zlib));
    assert_eq!(Compress::registry().name_of(id), "zlib");
}
