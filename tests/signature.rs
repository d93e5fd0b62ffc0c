#![allow(clippy::unwrap_used)]

use rstest::rstest;

use assh_algo::{
    algorithm::HostKey,
    codec::{
        DssSignature, EcdsaSignature, Ed25519Signature, KeyKind, RsaSignature, SignatureCodec,
        SignatureMaterial, DSS_COMPONENT_SIZE,
    },
    Error, Malformed,
};

mod common;
use common::{blob, mpint, string, wide, ShortMpint};

fn dss() -> SignatureMaterial {
    let r: [u8; DSS_COMPONENT_SIZE] = wide(20, 0x11).try_into().unwrap();

    DssSignature::from_components(&r, &[0x01; DSS_COMPONENT_SIZE])
        .unwrap()
        .into()
}

fn rsa() -> SignatureMaterial {
    RsaSignature::new(wide(256, 0x22)).into()
}

fn ecdsa() -> SignatureMaterial {
    EcdsaSignature::new("nistp521", mpint(&wide(66, 0x33)), mpint(&[0x44; 65]))
        .unwrap()
        .into()
}

fn ed25519() -> SignatureMaterial {
    Ed25519Signature::new([0x55; 64]).into()
}

#[rstest]
#[case(dss(), "ssh-dss", Some(HostKey::Dss))]
#[case(rsa(), "ssh-rsa", Some(HostKey::Rsa))]
#[case(ecdsa(), "ecdsa-sha2-nistp521", Some(HostKey::EcdsaNistp521))]
#[case(ed25519(), "ssh-ed25519", Some(HostKey::Ed25519))]
fn round_trip(
    #[case] signature: SignatureMaterial,
    #[case] format: &str,
    #[case] host_key: Option<HostKey>,
) {
    let codec = SignatureCodec::new();
    let bytes = codec.to_bytes(&signature).unwrap();

    assert_eq!(signature.format(), format);
    assert_eq!(signature.host_key(), host_key);
    assert_eq!(codec.encoded_len(&signature).unwrap(), bytes.len());
    assert_eq!(codec.from_bytes(&bytes).unwrap(), signature);
    assert_eq!(
        codec.decode_as(signature.kind(), &mut &bytes[..]).unwrap(),
        signature
    );
}

#[test_log::test]
fn dss_wire_layout() {
    let mut components = wide(20, 0x11);
    components.extend([0x01; DSS_COMPONENT_SIZE]);

    assert_eq!(
        SignatureCodec::new().to_bytes(&dss()).unwrap(),
        blob([string("ssh-dss"), string(&components)])
    );
}

#[rstest]
#[case(39)]
#[case(41)]
#[case(0)]
fn dss_payload_is_forty_bytes(#[case] len: usize) {
    let bytes = blob([string("ssh-dss"), string(vec![0x01; len])]);

    assert!(matches!(
        SignatureCodec::new().from_bytes(&bytes),
        Err(Error::MalformedSignature(Malformed::Length { expected: 40, found })) if found == len
    ));
}

#[rstest]
#[case(19)]
#[case(21)]
fn dss_components_are_fixed_width(#[case] len: usize) {
    let signature: SignatureMaterial =
        DssSignature::new(mpint(&wide(len, 0x11)), mpint(&[0x01; DSS_COMPONENT_SIZE])).into();
    let mut buffer = Vec::<u8>::new();

    assert!(matches!(
        SignatureCodec::new().encode(&signature, &mut buffer),
        Err(Error::Invariant { field: "r", len: found, expected: 20 }) if found == len
    ));
    assert!(buffer.is_empty());
}

#[test]
fn dss_leading_zero_component() {
    let mut components = vec![0x00; DSS_COMPONENT_SIZE];
    components[DSS_COMPONENT_SIZE - 1] = 0x01;
    components.extend([0x01; DSS_COMPONENT_SIZE]);

    let codec = SignatureCodec::new();
    let signature = codec
        .from_bytes(&blob([string("ssh-dss"), string(&components)]))
        .unwrap();

    // Decoding accepts it, but the value cannot be produced locally.
    assert!(matches!(
        codec.to_bytes(&signature),
        Err(Error::Invariant { field: "r", len: 1, .. })
    ));
}

#[test_log::test]
fn ecdsa_wire_layout() {
    let signature: SignatureMaterial =
        EcdsaSignature::new("nistp256", mpint(&[0x80, 0x01]), mpint(&[0x7f]))
            .unwrap()
            .into();

    assert_eq!(
        SignatureCodec::new().to_bytes(&signature).unwrap(),
        blob([
            string("ecdsa-sha2-nistp256"),
            string(blob([string([0x00, 0x80, 0x01]), string([0x7f])])),
        ])
    );
}

#[test]
fn ecdsa_trailing_byte() {
    let payload = blob([string([0x01, 0x02]), string([0x03]), vec![0x00]]);
    let bytes = blob([string("ecdsa-sha2-nistp256"), string(payload)]);

    assert!(matches!(
        SignatureCodec::new().from_bytes(&bytes),
        Err(Error::MalformedSignature(Malformed::TrailingData { remaining: 1 }))
    ));
}

#[rstest]
#[case(blob([string([0x01, 0x02])]))]
#[case(blob([string([0x01, 0x02]), vec![0x00, 0x00, 0x00, 0x02, 0x03]]))]
#[case(Vec::new())]
fn ecdsa_truncated_components(#[case] payload: Vec<u8>) {
    let bytes = blob([string("ecdsa-sha2-nistp384"), string(payload)]);

    assert!(matches!(
        SignatureCodec::new().from_bytes(&bytes),
        Err(Error::MalformedSignature(Malformed::Payload))
    ));
}

#[rstest]
#[case(rsa(), 3)]
#[case(ed25519(), 64)]
#[case(dss(), 1)]
#[case(ecdsa(), 70)]
fn truncated_blobs(#[case] signature: SignatureMaterial, #[case] cut: usize) {
    let bytes = SignatureCodec::new().to_bytes(&signature).unwrap();

    assert!(matches!(
        SignatureCodec::new().from_bytes(&bytes[..bytes.len() - cut]),
        Err(Error::MalformedSignature(Malformed::Payload))
    ));
}

#[test]
fn ecdsa_curve_comes_from_format() {
    let payload = blob([string([0x01]), string([0x02])]);
    let codec = SignatureCodec::new();

    let signature = codec
        .from_bytes(&blob([string("ecdsa-sha2-nistp384"), string(&payload)]))
        .unwrap();
    assert!(matches!(&signature, SignatureMaterial::Ecdsa(ecdsa) if ecdsa.curve() == "nistp384"));

    assert!(matches!(
        codec.from_bytes(&blob([string("ecdsa-sha2-"), string(&payload)])),
        Err(Error::MalformedSignature(Malformed::Curve { .. }))
    ));
}

#[rstest]
#[case(0)]
#[case(63)]
#[case(512)]
fn opaque_lengths_are_unchecked(#[case] len: usize) {
    let codec = SignatureCodec::new();

    for signature in [
        SignatureMaterial::from(RsaSignature::new(vec![0x01; len])),
        SignatureMaterial::from(Ed25519Signature::new(vec![0x01; len])),
    ] {
        let bytes = codec.to_bytes(&signature).unwrap();

        assert_eq!(bytes.len(), 4 + signature.format().len() + 4 + len);
        assert_eq!(codec.from_bytes(&bytes).unwrap(), signature);
    }
}

#[rstest]
#[case(KeyKind::Rsa)]
#[case(KeyKind::Ecdsa)]
#[case(KeyKind::Ed25519)]
fn dss_blob_is_only_dss(#[case] kind: KeyKind) {
    let bytes = SignatureCodec::new().to_bytes(&dss()).unwrap();

    assert!(matches!(
        SignatureCodec::new().decode_as(kind, &mut &bytes[..]),
        Err(Error::MalformedSignature(Malformed::Format { .. }))
    ));
}

#[test]
fn injected_integer_codec() {
    let codec = SignatureCodec::with_mpint(ShortMpint);
    let signature: SignatureMaterial = EcdsaSignature::new("nistp256", mpint(&[0x01]), mpint(&[0x02]))
        .unwrap()
        .into();

    let bytes = codec.to_bytes(&signature).unwrap();

    assert_eq!(
        bytes,
        blob([
            string("ecdsa-sha2-nistp256"),
            string([0x01, 0x01, 0x01, 0x02]),
        ])
    );
    assert_eq!(codec.encoded_len(&signature).unwrap(), bytes.len());
    assert_eq!(codec.from_bytes(&bytes).unwrap(), signature);

    // DSA components are fixed-width, whatever the integer encoding.
    assert_eq!(
        codec.to_bytes(&dss()).unwrap(),
        SignatureCodec::new().to_bytes(&dss()).unwrap()
    );
}
