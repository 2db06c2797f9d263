//! Property tests for the encoding laws.

use proptest::prelude::*;
use crate::construct::{Sequence, Set};
use crate::decode::{Decoder, GenericResolver, SliceSource};
use crate::encode::{PrimitiveContent, Values, infallible};
use crate::int;
use crate::length::Length;
use crate::oid::Oid;
use crate::string::{BitString, CharacterString, OctetString, StringKind};
use crate::tag::Tag;
use crate::value::Value;
use crate::wrapper::Tagged;


//------------ Strategies ----------------------------------------------------

fn arb_oid() -> impl Strategy<Value = Oid> {
    (
        0u64..3,
        0u64..40,
        prop::collection::vec(any::<u64>(), 0..6),
    ).prop_map(|(first, second, tail)| {
        let mut arcs = vec![first, second];
        arcs.extend(tail);
        Oid::new(&arcs).unwrap()
    })
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::Integer),
        any::<i64>().prop_map(Value::Enumerated),
        Just(Value::Null),
        any::<f64>().prop_filter("NaN", |v| !v.is_nan()).prop_map(
            Value::Real
        ),
        prop::collection::vec(any::<bool>(), 0..40).prop_map(|bits| {
            Value::BitString(BitString::from_bits(bits))
        }),
        prop::collection::vec(any::<u8>(), 0..300).prop_map(|octets| {
            Value::OctetString(OctetString::from(octets))
        }),
        arb_oid().prop_map(Value::ObjectId),
        (
            prop::sample::select(StringKind::ALL.to_vec()), ".{0,20}"
        ).prop_map(|(kind, s)| {
            Value::String(CharacterString::new(kind, s))
        }),
        (0u8..31, prop::collection::vec(any::<u8>(), 0..8)).prop_map(
            |(number, octets)| {
                Value::Tagged(Tagged::implicit(
                    Tag::ctx(number), OctetString::from(octets)
                ))
            }
        ),
    ]
}

/// Trees that decode back into themselves with the generic resolver.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(|values| {
                Value::Sequence(Sequence::from_vec(values))
            }),
            prop::collection::vec(inner.clone(), 0..8).prop_map(|values| {
                Value::Set(Set::from_vec(values))
            }),
            (0u8..31, inner).prop_map(|(number, value)| {
                Value::Tagged(Tagged::explicit(Tag::ctx(number), value))
            }),
        ]
    })
}


//------------ Properties ----------------------------------------------------

proptest! {
    #[test]
    fn value_round_trip(value in arb_value()) {
        let encoded = value.to_vec();
        prop_assert_eq!(encoded.len(), value.encoded_len());
        let decoded = Decoder::with_resolver(
            GenericResolver::Explicit
        ).decode_slice(&encoded).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn integer_round_trip(value in any::<i64>()) {
        let content = int::content_octets(value);
        let content = content.as_ref();
        prop_assert_eq!(int::i64_from_content(content), Some(value));
    }

    #[test]
    fn integer_minimal(value in any::<i32>()) {
        let value = i64::from(value);
        let content = int::content_octets(value);
        let content = content.as_ref();
        prop_assert!(!content.is_empty());
        if let [first, second, ..] = *content {
            // No octet would be redundant.
            prop_assert!(!(first == 0x00 && second & 0x80 == 0));
            prop_assert!(!(first == 0xFF && second & 0x80 != 0));
        }
        prop_assert_eq!(content[0] & 0x80 != 0, value < 0);
    }

    #[test]
    fn length_round_trip(len in 0usize..=(u32::MAX as usize)) {
        let mut encoded = Vec::new();
        infallible(Length::Definite(len).write_encoded(&mut encoded));
        prop_assert_eq!(encoded.len(), Length::Definite(len).encoded_len());
        let decoded = Length::take_from(
            &mut SliceSource::new(&encoded)
        ).unwrap();
        prop_assert_eq!(decoded, Length::Definite(len));
    }

    #[test]
    fn oid_round_trip(oid in arb_oid()) {
        let mut content = Vec::new();
        infallible(PrimitiveContent::write_encoded(&oid, &mut content));
        prop_assert_eq!(
            Oid::from_content(&content, Default::default()).unwrap(),
            oid.clone()
        );
        prop_assert_eq!(oid.to_string().parse::<Oid>().unwrap(), oid);
    }

    #[test]
    fn nonzero_is_true(octet in 1u8..) {
        prop_assert_eq!(
            Value::decode_slice(&[0x01, 0x01, octet]).unwrap(),
            Value::Boolean(true)
        );
    }
}
