// Float transcoder: portable layout, inf/nan policy, denormal policy.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;
    use archive_core::codec::{decode_float, encode_float, FloatClass, FloatParts, FloatPolicy, PortableFloat};
    use archive_core::types::{AbnormalValue, ArchiveError, ErrorKind};

    const NO_INFNAN: FloatPolicy = FloatPolicy { no_infnan: true, allow_denormals: true };
    const NO_DENORM: FloatPolicy = FloatPolicy { no_infnan: false, allow_denormals: false };

    fn encode<T: PortableFloat>(v: T, policy: FloatPolicy) -> Result<Vec<u8>, ArchiveError> {
        let mut out = Vec::new();
        encode_float(&mut out, v, policy)?;
        Ok(out)
    }

    fn decode<T: PortableFloat>(bytes: &[u8], policy: FloatPolicy) -> Result<T, ArchiveError> {
        decode_float(&mut Cursor::new(bytes), policy)
    }

// ## 1️⃣ Layout

    #[test]
    fn double_layout_is_sign_exponent_mantissa_msb_first() {
        let bytes = encode(1.0f64, FloatPolicy::default()).unwrap();
        assert_eq!(bytes, vec![0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);

        let bytes = encode(-2.0f64, FloatPolicy::default()).unwrap();
        assert_eq!(bytes, vec![0xC0, 0x00, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn single_layout_is_four_bytes() {
        let bytes = encode(1.0f32, FloatPolicy::default()).unwrap();
        assert_eq!(bytes, vec![0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn parts_pack_unpack() {
        let parts = FloatParts { sign: true, exponent: 0x80, mantissa: 0x40_0000 };
        let word = parts.pack::<f32>();
        assert_eq!(word, 0xC040_0000);
        assert_eq!(FloatParts::unpack::<f32>(word), parts);
        assert_eq!(f32::from_bits(word as u32), -3.0);
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let bytes = encode(-0.0f64, FloatPolicy::default()).unwrap();
        let back: f64 = decode(&bytes, FloatPolicy::default()).unwrap();
        assert_eq!(back.to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn pi_roundtrips_bit_exact() {
        let v = 3.14159265358979f64;
        let back: f64 = decode(&encode(v, FloatPolicy::default()).unwrap(), FloatPolicy::default()).unwrap();
        assert_eq!(back.to_bits(), v.to_bits());
    }

// ## 2️⃣ inf / nan policy

    #[test]
    fn infinity_roundtrips_without_policy() {
        let back: f64 = decode(&encode(f64::INFINITY, FloatPolicy::default()).unwrap(), FloatPolicy::default()).unwrap();
        assert_eq!(back, f64::INFINITY);
    }

    #[test]
    fn infinity_encode_rejected_under_no_infnan() {
        let err = encode(f64::INFINITY, NO_INFNAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalFloatValue);
        assert!(matches!(err, ArchiveError::IllegalFloatValue(AbnormalValue::Double(v)) if v == f64::INFINITY));
        assert!(err.to_string().starts_with("serialization of illegal floating point value: "));
    }

    #[test]
    fn nan_encode_rejected_under_no_infnan() {
        let err = encode(f32::NAN, NO_INFNAN).unwrap_err();
        assert!(matches!(err, ArchiveError::IllegalFloatValue(AbnormalValue::Single(v)) if v.is_nan()));
    }

    #[test]
    fn infinity_decode_rejected_under_no_infnan() {
        let bytes = encode(f32::NEG_INFINITY, FloatPolicy::default()).unwrap();
        let err = decode::<f32>(&bytes, NO_INFNAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalFloatValue);
    }

    #[test]
    fn nan_payload_survives() {
        let quiet_with_payload = f64::from_bits(0x7FF8_0000_DEAD_BEEF);
        let bytes = encode(quiet_with_payload, FloatPolicy::default()).unwrap();
        let back: f64 = decode(&bytes, FloatPolicy::default()).unwrap();
        assert_eq!(back.to_bits(), 0x7FF8_0000_DEAD_BEEF);
    }

    #[test]
    fn finite_values_pass_no_infnan() {
        let bytes = encode(1.5e300f64, NO_INFNAN).unwrap();
        assert_eq!(decode::<f64>(&bytes, NO_INFNAN).unwrap(), 1.5e300);
    }

// ## 3️⃣ Denormals

    #[test]
    fn denormal_is_classified() {
        let tiny = f64::from_bits(1);
        assert_eq!(tiny.to_parts().classify::<f64>(), FloatClass::Subnormal);
    }

    #[test]
    fn denormal_roundtrips_when_target_supports_it() {
        let tiny = f64::from_bits(1);
        let bytes = encode(tiny, NO_DENORM).unwrap();
        assert_eq!(decode::<f64>(&bytes, FloatPolicy::default()).unwrap().to_bits(), 1);
    }

    #[test]
    fn denormal_decode_rejected_without_support() {
        let tiny = f32::from_bits(0x0000_0100);
        let bytes = encode(tiny, FloatPolicy::default()).unwrap();
        let err = decode::<f32>(&bytes, NO_DENORM).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalFloatValue);
    }

    #[test]
    fn truncated_float_is_io_eof() {
        let err = decode::<f64>(&[0x3F, 0xF0, 0x00], FloatPolicy::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

// ## 4️⃣ Properties

    proptest! {
        #[test]
        fn prop_f64_bits_roundtrip(bits in any::<u64>()) {
            let v = f64::from_bits(bits);
            let back: f64 = decode(&encode(v, FloatPolicy::default()).unwrap(), FloatPolicy::default()).unwrap();
            prop_assert_eq!(back.to_bits(), bits);
        }

        #[test]
        fn prop_f32_bits_roundtrip(bits in any::<u32>()) {
            let v = f32::from_bits(bits);
            let back: f32 = decode(&encode(v, FloatPolicy::default()).unwrap(), FloatPolicy::default()).unwrap();
            prop_assert_eq!(back.to_bits(), bits);
        }

        #[test]
        fn prop_normal_f64_roundtrip_under_strict_policy(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let strict = FloatPolicy { no_infnan: true, allow_denormals: false };
            let back: f64 = decode(&encode(v, strict).unwrap(), strict).unwrap();
            prop_assert_eq!(back.to_bits(), v.to_bits());
        }

        #[test]
        fn prop_wire_is_host_independent(v in any::<f64>()) {
            let bytes = encode(v, FloatPolicy::default()).unwrap();
            prop_assert_eq!(bytes, v.to_bits().to_be_bytes().to_vec());
        }
    }
}
