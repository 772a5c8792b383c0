//! Unit tests for the constant model.

use super::*;
use rstest::rstest;
use std::collections::HashSet;

type D = ConstantValueTypeDiscriminator;

const NEGATIVE_ZERO: f64 = f64::from_bits(0x8000_0000_0000_0000);

fn sample(discriminator: D) -> Option<PrimitiveValue> {
    let value = match discriminator {
        D::Null | D::Bad => return None,
        D::SByte => PrimitiveValue::SByte(-5),
        D::Byte => PrimitiveValue::Byte(200),
        D::Int16 => PrimitiveValue::Int16(-300),
        D::UInt16 => PrimitiveValue::UInt16(60_000),
        D::Int32 | D::NInt => PrimitiveValue::Int32(-70_000),
        D::UInt32 | D::NUInt => PrimitiveValue::UInt32(4_000_000_000),
        D::Int64 => PrimitiveValue::Int64(-5_000_000_000),
        D::UInt64 => PrimitiveValue::UInt64(u64::MAX),
        D::Char => PrimitiveValue::Char(u16::from(b'x')),
        D::Boolean => PrimitiveValue::Boolean(true),
        D::Single => PrimitiveValue::Single(2.5),
        D::Double => PrimitiveValue::Double(-0.125),
        D::String => PrimitiveValue::String("text".into()),
        D::Decimal => PrimitiveValue::Decimal(Decimal::new(12_345, 2)),
        D::DateTime => PrimitiveValue::DateTime(630_822_816_000_000_000),
    };
    Some(value)
}

fn serialized(value: &ConstantValue) -> Vec<u8> {
    let mut out = Vec::new();
    value
        .serialize(&mut out)
        .unwrap_or_else(|e| panic!("writing to a Vec failed: {e}"));
    out
}

#[test]
fn every_discriminator_round_trips_through_its_encoding() {
    for (index, discriminator) in D::ALL.iter().enumerate() {
        assert_eq!(usize::from(discriminator.to_u8()), index);
        assert_eq!(D::from_u8(discriminator.to_u8()), Some(*discriminator));
    }
    assert_eq!(D::from_u8(19), None);
}

#[test]
fn every_discriminator_has_a_default_and_creates_from_its_value() {
    for discriminator in D::ALL {
        let default = ConstantValue::default_for(discriminator);
        let default_kind = if discriminator == D::String { D::Null } else { discriminator };
        assert_eq!(default.discriminator(), default_kind);
        assert_eq!(
            default.is_default_value(),
            discriminator != D::Bad,
            "{discriminator:?} default"
        );

        let created = ConstantValue::create_from(sample(discriminator), discriminator);
        assert_eq!(created.discriminator(), discriminator, "{discriminator:?}");

        let recreated = ConstantValue::create_from(created.value(), discriminator);
        assert_eq!(recreated, created, "{discriminator:?} value round trip");

        if let Some(name) = discriminator.primitive_type_name() {
            assert_eq!(D::from_primitive_type_name(name), Some(discriminator));
        }
    }
}

#[test]
fn string_default_is_null() {
    let default = ConstantValue::default_for(D::String);
    assert!(default.is_null());
    assert!(default.ptr_eq(&ConstantValue::null()));
}

#[rstest]
#[case::int32(ConstantValue::create_int32(0), D::Int32)]
#[case::uint64(ConstantValue::create_uint64(0), D::UInt64)]
#[case::boolean(ConstantValue::create_bool(false), D::Boolean)]
#[case::double(ConstantValue::create_double(0.0), D::Double)]
#[case::single(ConstantValue::create_single(0.0), D::Single)]
#[case::decimal(ConstantValue::create_decimal(Decimal::ZERO), D::Decimal)]
#[case::native_int(ConstantValue::create_native_int(0), D::NInt)]
fn zeros_are_shared(#[case] zero: ConstantValue, #[case] discriminator: D) {
    assert!(zero.ptr_eq(&ConstantValue::default_for(discriminator)));
}

#[rstest]
#[case::sbyte(ConstantValue::create_sbyte(1), ConstantValue::create_sbyte(1))]
#[case::boolean(ConstantValue::create_bool(true), ConstantValue::from(true))]
#[case::double(ConstantValue::create_double(1.0), ConstantValue::from(1.0_f64))]
#[case::decimal(ConstantValue::create_decimal(Decimal::ONE), ConstantValue::from(Decimal::ONE))]
fn ones_are_shared(#[case] left: ConstantValue, #[case] right: ConstantValue) {
    assert!(left.ptr_eq(&right));
    assert!(left.is_one());
}

#[rstest]
#[case::boolean_true(ConstantValue::create_bool(true), true)]
#[case::boolean_false(ConstantValue::create_bool(false), false)]
#[case::char_one(ConstantValue::create_char(1), false)]
#[case::nuint_one(ConstantValue::create_native_uint(1), true)]
#[case::scaled_decimal_one(ConstantValue::create_decimal(Decimal::new(10, 1)), true)]
#[case::single_two(ConstantValue::create_single(2.0), false)]
fn is_one_by_kind(#[case] value: ConstantValue, #[case] expected: bool) {
    assert_eq!(value.is_one(), expected, "{value:?}");
}

#[test]
fn reference_type_defaults_share_the_null_instance() {
    let string_default = ConstantValue::default_for(D::String);
    assert!(string_default.ptr_eq(&ConstantValue::default_for(D::Null)));
    assert!(string_default.ptr_eq(&ConstantValue::create_from(None, D::String)));
}

#[test]
fn negative_zero_is_not_the_shared_zero_but_compares_equal() {
    let negative = ConstantValue::create_double(NEGATIVE_ZERO);
    let positive = ConstantValue::create_double(0.0);
    assert!(!negative.ptr_eq(&positive));
    assert_eq!(negative, positive);
    assert!(negative.is_default_value());
    assert!(!negative.is_negative_numeric());
    assert_eq!(negative.double_value().to_bits(), 0x8000_0000_0000_0000);
}

#[test]
fn scaled_decimal_zero_is_distinct_instance_with_equal_value() {
    let scaled = ConstantValue::create_decimal(Decimal::new(0, 2));
    let zero = ConstantValue::create_decimal(Decimal::ZERO);
    assert!(!scaled.ptr_eq(&zero));
    assert_eq!(scaled, zero);
    assert!(scaled.is_default_value());
}

#[test]
fn nan_is_canonicalised() {
    let quiet = ConstantValue::create_double(f64::NAN);
    let payload = ConstantValue::create_double(f64::from_bits(0x7FF0_0000_0000_0001));
    assert_eq!(quiet, payload);
    assert_eq!(quiet.double_value().to_bits(), CANONICAL_NAN_BITS);
    assert_eq!(
        ConstantValue::create_single(f32::NAN).single_value().to_bits(),
        CANONICAL_SINGLE_NAN_BITS
    );

    let mut set = HashSet::new();
    set.insert(quiet);
    assert!(set.contains(&payload));
}

#[test]
fn equal_values_hash_alike() {
    let mut set = HashSet::new();
    set.insert(ConstantValue::create_double(0.0));
    set.insert(ConstantValue::create_double(NEGATIVE_ZERO));
    set.insert(ConstantValue::create_string("ab"));
    set.insert(ConstantValue::from_rope(Rope::from("a").concat(&Rope::from("b"))));
    assert_eq!(set.len(), 2);
}

#[rstest]
#[case::int32_vs_nint(ConstantValue::create_int32(7), ConstantValue::create_native_int(7))]
#[case::int32_vs_int64(ConstantValue::create_int32(7), ConstantValue::create_int64(7))]
#[case::single_vs_double(ConstantValue::create_single(2.5), ConstantValue::create_double(2.5))]
#[case::null_vs_unset(ConstantValue::null(), ConstantValue::unset())]
#[case::null_vs_bad(ConstantValue::null(), ConstantValue::bad())]
fn different_kinds_are_unequal(#[case] left: ConstantValue, #[case] right: ConstantValue) {
    assert_ne!(left, right);
}

#[test]
fn unset_equals_itself_and_reads_as_null() {
    let unset = ConstantValue::unset();
    assert_eq!(unset, ConstantValue::unset());
    assert!(unset.is_unset());
    assert!(unset.is_null());
    assert_eq!(unset.discriminator(), D::Null);
}

#[test]
fn narrow_values_widen_through_wider_accessors() {
    let int16 = ConstantValue::create_int16(-1);
    assert_eq!(int16.int32_value(), -1);
    assert_eq!(int16.int64_value(), -1);

    let uint16 = ConstantValue::create_uint16(0xFFFF);
    assert_eq!(uint16.int32_value(), 0xFFFF);
    assert_eq!(uint16.uint64_value(), 0xFFFF);

    let byte = ConstantValue::create_byte(200);
    assert_eq!(byte.int16_value(), 200);
    assert_eq!(byte.sbyte_value(), -56);

    let nint = ConstantValue::create_native_int(-3);
    assert_eq!(nint.int32_value(), -3);
    assert_eq!(nint.int64_value(), -3);
}

#[test]
fn single_is_narrowed_on_read() {
    let folded = ConstantValue::create_single_from_double(0.1);
    assert_eq!(folded.single_value().to_bits(), 0.1_f32.to_bits());
    assert_eq!(folded.double_value().to_bits(), 0.1_f64.to_bits());
}

#[test]
#[should_panic(expected = "int16_value is not valid")]
fn wide_value_rejects_narrow_accessor() {
    let _ = ConstantValue::create_int32(1).int16_value();
}

#[test]
#[should_panic(expected = "boolean_value is not valid")]
fn boolean_accessor_rejects_integers() {
    let _ = ConstantValue::create_int32(1).boolean_value();
}

#[test]
#[should_panic(expected = "unexpected value")]
fn create_from_rejects_mismatched_payload() {
    let _ = ConstantValue::create_from(Some(PrimitiveValue::Int64(1)), D::Int32);
}

#[rstest]
#[case::zero(ConstantValue::create_int32(0), Some(false))]
#[case::one(ConstantValue::create_uint64(1), Some(true))]
#[case::two(ConstantValue::create_byte(2), None)]
#[case::double_one(ConstantValue::create_double(1.0), None)]
#[case::boolean(ConstantValue::create_bool(true), None)]
#[case::char_zero(ConstantValue::create_char(0), None)]
#[case::char_one(ConstantValue::create_char(1), None)]
fn integral_zero_or_one(#[case] value: ConstantValue, #[case] expected: Option<bool>) {
    assert_eq!(value.is_integral_value_zero_or_one(), expected);
}

#[rstest]
#[case::int(ConstantValue::create_int32(-1), true)]
#[case::double(ConstantValue::create_double(f64::from_bits(0xBFE0_0000_0000_0000)), true)]
#[case::decimal(ConstantValue::create_decimal(Decimal::NEGATIVE_ONE), true)]
#[case::unsigned(ConstantValue::create_uint32(u32::MAX), false)]
#[case::nan(ConstantValue::create_double(f64::NAN), false)]
#[case::string(ConstantValue::create_string("-1"), false)]
fn negative_numeric(#[case] value: ConstantValue, #[case] expected: bool) {
    assert_eq!(value.is_negative_numeric(), expected);
}

#[test]
fn classification_follows_discriminator() {
    let nuint = ConstantValue::create_native_uint(5);
    assert!(nuint.is_integral() && nuint.is_unsigned() && nuint.is_numeric());
    let c = ConstantValue::create_char(0x41);
    assert!(c.is_char() && !c.is_integral() && !c.is_numeric());
    let d = ConstantValue::create_decimal(Decimal::new(15, 1));
    assert!(d.is_decimal() && d.is_numeric() && !d.is_floating());
}

#[test]
fn rope_strings_flatten_lazily_and_compare_by_content() {
    let rope = Rope::from("con").concat(&Rope::from("stant"));
    let lazy = ConstantValue::from_rope(rope.clone());
    let flat = ConstantValue::create_string("constant");
    assert_eq!(lazy, flat);
    assert_eq!(lazy.string_value().as_deref(), Some("constant"));
    assert_eq!(lazy.rope_value(), Some(rope));
    assert_eq!(ConstantValue::null().string_value(), None);
}

#[test]
fn rope_chunks_skip_empty_leaves() {
    let rope = Rope::from("a")
        .concat(&Rope::empty())
        .concat(&Rope::from("b").concat(&Rope::from("c")));
    assert_eq!(rope.chunks().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(rope.len(), 3);
    assert_eq!(Rope::from("é").len_utf16(), 1);
}

#[rstest]
#[case::boolean(ConstantValue::create_bool(true), vec![1])]
#[case::sbyte(ConstantValue::create_sbyte(-2), vec![0xFE])]
#[case::char(ConstantValue::create_char(0x0041), vec![0x41, 0x00])]
#[case::int32(ConstantValue::create_int32(0x0102_0304), vec![4, 3, 2, 1])]
#[case::nuint(ConstantValue::create_native_uint(1), vec![1, 0, 0, 0])]
#[case::single(ConstantValue::create_single(1.0), vec![0x00, 0x00, 0x80, 0x3F])]
#[case::double(ConstantValue::create_double(1.0), vec![0, 0, 0, 0, 0, 0, 0xF0, 0x3F])]
#[case::date_time(ConstantValue::create_date_time(1), vec![1, 0, 0, 0, 0, 0, 0, 0])]
#[case::string(ConstantValue::create_string("hi"), vec![b'h', 0, b'i', 0])]
#[case::null(ConstantValue::null(), vec![0, 0, 0, 0])]
fn serializes_little_endian_payloads(#[case] value: ConstantValue, #[case] expected: Vec<u8>) {
    assert_eq!(serialized(&value), expected);
}

#[test]
#[should_panic(expected = "unexpected value")]
fn decimal_has_no_blob_encoding() {
    let _ = serialized(&ConstantValue::create_decimal(Decimal::ONE));
}

#[rstest]
#[case::boolean(ConstantValue::create_bool(false), "False")]
#[case::int(ConstantValue::create_int64(-42), "-42")]
#[case::double(ConstantValue::create_double(0.1), "0.1")]
#[case::infinity(ConstantValue::create_double(f64::NEG_INFINITY), "-Infinity")]
#[case::nan(ConstantValue::create_single(f32::NAN), "NaN")]
#[case::char(ConstantValue::create_char(0x61), "'a'")]
#[case::surrogate(ConstantValue::create_char(0xD800), "'\\u{D800}'")]
#[case::string(ConstantValue::create_string("a\"b"), "\"a\\\"b\"")]
#[case::decimal(ConstantValue::create_decimal(Decimal::new(150, 2)), "1.50")]
#[case::null(ConstantValue::null(), "null")]
#[case::bad(ConstantValue::bad(), "bad")]
fn displays_invariant_text(#[case] value: ConstantValue, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[test]
fn debug_names_the_kind() {
    assert_eq!(
        format!("{:?}", ConstantValue::create_int32(3)),
        "ConstantValue(Int32: 3)"
    );
    assert_eq!(format!("{:?}", ConstantValue::unset()), "ConstantValue(Unset)");
}

#[test]
fn decimal_bits_match_platform_layout() {
    assert_eq!(decimal_bits(&Decimal::new(-150, 2)), [150, 0, 0, 0x8002_0000]);
    assert_eq!(decimal_bits(&Decimal::ONE), [1, 0, 0, 0]);
}
