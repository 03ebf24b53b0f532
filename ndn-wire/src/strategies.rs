//! proptest generators for the codec's value types

use crate::encrypted_content::{EncryptAlgorithmType, EncryptedContent};
use crate::name::{ComponentType, Name, NameComponent};
use crate::packets::{ContentType, Data, MetaInfo};
use crate::signature::{KeyLocator, Signature, SignatureType, ValidityPeriod};
use chrono::{DateTime, NaiveDateTime, Utc};
use proptest::prelude::*;
use std::time::Duration;

/// 0000-01-01T00:00:00 and 9999-12-31T23:59:59 as Unix seconds
const FIRST_ENCODABLE_SECOND: i64 = -62_167_219_200;
const LAST_ENCODABLE_SECOND: i64 = 253_402_300_799;

pub fn name_component() -> impl Strategy<Value = NameComponent> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..24).prop_map(NameComponent::new),
        (0usize..5).prop_map(|n| NameComponent::new(vec![b'.'; n])),
        any::<u64>().prop_map(NameComponent::from_version),
        any::<[u8; 32]>()
            .prop_map(|d| NameComponent::with_type(d.to_vec(), ComponentType::ImplicitSha256Digest)),
        any::<[u8; 32]>()
            .prop_map(|d| NameComponent::with_type(d.to_vec(), ComponentType::ParametersSha256Digest)),
    ]
}

pub fn name() -> impl Strategy<Value = Name> {
    prop::collection::vec(name_component(), 0..8).prop_map(Name::from)
}

/// Any instant whose whole seconds fit `YYYYMMDDTHHMMSS`
pub fn encodable_time() -> impl Strategy<Value = NaiveDateTime> {
    (FIRST_ENCODABLE_SECOND..LAST_ENCODABLE_SECOND, 0u32..1_000_000_000).prop_filter_map(
        "out of chrono range",
        |(secs, nanos)| DateTime::<Utc>::from_timestamp(secs, nanos).map(|t| t.naive_utc()),
    )
}

pub fn validity_period() -> impl Strategy<Value = ValidityPeriod> {
    (encodable_time(), encodable_time())
        .prop_filter_map("unencodable", |(not_before, not_after)| {
            ValidityPeriod::new(not_before, not_after).ok()
        })
}

pub fn key_locator() -> impl Strategy<Value = KeyLocator> {
    prop_oneof![
        Just(KeyLocator::None),
        name().prop_map(KeyLocator::KeyName),
        prop::collection::vec(any::<u8>(), 0..40).prop_map(KeyLocator::KeyDigest),
    ]
}

pub fn signature_type() -> impl Strategy<Value = SignatureType> {
    prop::sample::select(vec![
        SignatureType::DigestSha256,
        SignatureType::Sha256WithRsa,
        SignatureType::Sha256WithEcdsa,
        SignatureType::HmacWithSha256,
    ])
}

pub fn signature() -> impl Strategy<Value = Signature> {
    (
        signature_type(),
        key_locator(),
        prop::option::of(validity_period()),
        prop::collection::vec(any::<u8>(), 0..300),
    )
        .prop_map(|(signature_type, key_locator, validity_period, value)| Signature {
            signature_type,
            key_locator,
            validity_period,
            value,
        })
}

pub fn meta_info() -> impl Strategy<Value = MetaInfo> {
    (
        any::<u64>(),
        prop::option::of((any::<u64>(), 0u32..1_000_000_000)),
        prop::option::of(name_component()),
    )
        .prop_map(|(code, freshness, final_block_id)| {
            let mut meta_info = MetaInfo::default();
            meta_info.set_content_type(ContentType::Other(code));
            if let Some((secs, nanos)) = freshness {
                meta_info.set_freshness_period(Duration::new(secs, nanos));
            }
            if let Some(component) = final_block_id {
                meta_info.set_final_block_id(component);
            }
            meta_info
        })
}

pub fn data() -> impl Strategy<Value = Data> {
    (
        name(),
        meta_info(),
        prop::collection::vec(any::<u8>(), 0..600),
        signature(),
    )
        .prop_map(|(name, meta_info, content, signature)| {
            Data::new(name, content)
                .with_meta_info(meta_info)
                .with_signature(signature)
        })
}

pub fn algorithm_type() -> impl Strategy<Value = EncryptAlgorithmType> {
    prop::sample::select(vec![
        EncryptAlgorithmType::AesEcb,
        EncryptAlgorithmType::AesCbc,
        EncryptAlgorithmType::RsaPkcs,
        EncryptAlgorithmType::RsaOaep,
    ])
}

/// Fully populated content; the initial vector may be unset
pub fn encrypted_content() -> impl Strategy<Value = EncryptedContent> {
    (
        algorithm_type(),
        key_locator().prop_filter("key locator is mandatory", |k| !k.is_none()),
        prop::option::of(prop::collection::vec(any::<u8>(), 0..32)),
        prop::collection::vec(any::<u8>(), 0..300),
    )
        .prop_map(|(algorithm_type, key_locator, initial_vector, payload)| {
            let mut content = EncryptedContent::new();
            content
                .set_algorithm_type(algorithm_type)
                .set_key_locator(key_locator)
                .set_payload(payload);
            if let Some(initial_vector) = initial_vector {
                content.set_initial_vector(initial_vector);
            }
            content
        })
}
