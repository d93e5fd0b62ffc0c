use rstest::rstest;

use super::*;
use crate::algorithm::{Cipher, Compress, HostKey, Hmac, Kex};

fn host_keys() -> PriorityList<HostKey> {
    HostKey::registry().priority_list(AlgorithmId::UNKNOWN)
}

#[test]
fn local_order_wins() {
    assert_eq!(
        negotiate(&host_keys(), "ssh-rsa,ssh-ed25519"),
        HostKey::Ed25519.id()
    );
}

#[test]
fn no_overlap_is_unknown() {
    let local = HostKey::registry().priority_list(HostKey::EcdsaNistp521.id());

    assert_eq!(local.to_string(), "ssh-rsa,ssh-dss");
    assert_eq!(negotiate(&local, "ssh-ed25519"), AlgorithmId::UNKNOWN);
}

#[rstest]
#[case("")]
#[case(",")]
#[case("ssh-rsa ")]
#[case("SSH-RSA")]
#[case("ssh-rsa-cert-v01@openssh.com")]
fn only_exact_names_match(#[case] remote: &str) {
    assert_eq!(negotiate(&host_keys(), remote), AlgorithmId::UNKNOWN);
}

#[rstest]
#[case("ssh-dss,ssh-dss,ssh-dss", HostKey::Dss)]
#[case("ssh-dss,,ssh-rsa", HostKey::Rsa)]
#[case("unknown,ecdsa-sha2-nistp384,ecdsa-sha2-nistp256", HostKey::EcdsaNistp256)]
fn remote_is_a_set(#[case] remote: &str, #[case] expected: HostKey) {
    assert_eq!(negotiate(&host_keys(), remote), expected.id());
}

#[test]
fn preference_intersect_composes() {
    let registry = Kex::registry();
    let remote = "diffie-hellman-group1-sha1,ecdh-sha2-nistp384,curve25519-sha256@libssh.org";

    assert_eq!(
        registry.preference_intersect(remote, AlgorithmId::UNKNOWN),
        Kex::Curve25519Sha256Libssh.id()
    );
    assert_eq!(
        registry.preference_intersect(remote, Kex::Curve25519Sha256Libssh.id()),
        Kex::EcdhSha2Nistp384.id()
    );
    assert_eq!(
        registry.preference_intersect(remote, Kex::EcdhSha2Nistp384.id()),
        Kex::DiffieHellmanGroup1Sha1.id()
    );
    assert_eq!(
        registry.preference_intersect(remote, registry.end()),
        AlgorithmId::UNKNOWN
    );
}

#[test]
fn typed_negotiation() {
    assert_eq!(
        Cipher::negotiate("aes128-ctr,aes256-gcm@openssh.com").ok(),
        Some(Cipher::Aes256Gcm)
    );
    assert_eq!(
        Compress::negotiate("zlib,none").ok(),
        Some(Compress::None)
    );
    assert_eq!(
        Hmac::negotiate_after("hmac-sha2-512,hmac-sha1", Hmac::HmacSha512.id()).ok(),
        Some(Hmac::HmacSha1)
    );
}

#[test]
fn typed_negotiation_errors() {
    assert!(matches!(Kex::negotiate("curve25519-sha256"), Err(Error::NoCommonKex)));
    assert!(matches!(HostKey::negotiate("rsa-sha2-512"), Err(Error::NoCommonKey)));
    assert!(matches!(Cipher::negotiate("none"), Err(Error::NoCommonCipher)));
    assert!(matches!(Hmac::negotiate(""), Err(Error::NoCommonHmac)));
    assert!(matches!(
        Compress::negotiate("zstd@openssh.com"),
        Err(Error::NoCommonCompression)
    ));
}

#[test]
fn name_lists() {
    let list = NameList::new("a,b,,a");

    assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "", "a"]);
    assert_eq!(list.to_set().len(), 3);
    assert_eq!(NameList::new("").iter().collect::<Vec<_>>(), [""]);
    assert_eq!(list.as_str(), "a,b,,a");
}
