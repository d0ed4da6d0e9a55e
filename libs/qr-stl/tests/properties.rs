//! Property tests for the full conversion.

use config::constants::{
    stl_buffer_len, STL_HEADER_LEN, STL_PREAMBLE_LEN, STL_TRIANGLE_RECORD_LEN,
    TRIANGLES_PER_CUBOID,
};
use proptest::prelude::*;

fn dimension() -> impl Strategy<Value = f64> {
    0.05f64..500.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_length_law(
        text in ".{0,60}",
        base_height in dimension(),
        base_size in dimension(),
        pixel_size in dimension(),
    ) {
        let stl = qr_stl::convert(
            &text,
            &base_height.to_string(),
            &base_size.to_string(),
            &pixel_size.to_string(),
        )
        .unwrap();
        let dark = qr_encode::encode(&text).unwrap().dark_module_count();
        prop_assert_eq!(stl.len(), stl_buffer_len(TRIANGLES_PER_CUBOID * (1 + dark)));

        let field: [u8; 4] = stl[STL_HEADER_LEN..STL_PREAMBLE_LEN].try_into().unwrap();
        let count = u32::from_le_bytes(field) as usize;
        let body = stl.len() - STL_PREAMBLE_LEN;
        prop_assert_eq!(body % STL_TRIANGLE_RECORD_LEN, 0);
        prop_assert_eq!(body / STL_TRIANGLE_RECORD_LEN, count);
    }

    #[test]
    fn prop_deterministic(text in "[ -~]{0,40}", pixel_size in dimension()) {
        let pixel = pixel_size.to_string();
        let a = qr_stl::convert(&text, "1", "50", &pixel).unwrap();
        let b = qr_stl::convert(&text, "1", "50", &pixel).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_non_positive_rejected(value in -100.0f64..=0.0) {
        let result = qr_stl::convert("HELLO", "1", &value.to_string(), "2");
        let is_invalid_parameter = matches!(
            result,
            Err(qr_stl::ConvertError::InvalidParameter { name: "base_size", .. })
        );
        prop_assert!(is_invalid_parameter);
    }
}
