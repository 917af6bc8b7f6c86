//! Base64 and URL codec tests

use jlib_core::JlibError;
use jlib_core::functions::{
    base64_decode, base64_encode, decode_url, encode_url, encode_url_component,
};

#[cfg(test)]
mod base64_tests {
    use super::*;

    #[test]
    fn test_encode_and_decode() {
        assert_eq!(base64_encode("hello"), "aGVsbG8=");
        assert_eq!(base64_decode("aGVsbG8=").expect("decode should succeed"), "hello");
        assert_eq!(base64_encode("ü"), "w7w=");
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(base64_decode("!!!"), Err(JlibError::Decode(_))));
        // 0xFF on its own is not UTF-8
        assert!(matches!(base64_decode("/w=="), Err(JlibError::Decode(_))));
    }
}

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn test_component_round_trip() {
        let encoded = encode_url_component("a b&c=d/é").expect("encode should succeed");
        assert_eq!(encoded, "a+b%26c%3Dd%2F%C3%A9");
        assert_eq!(decode_url(&encoded).expect("decode should succeed"), "a b&c=d/é");
    }

    #[test]
    fn test_unreserved_characters_are_kept() {
        assert_eq!(encode_url_component("AZaz09-_.~").expect("encode should succeed"), "AZaz09-_.~");
    }

    #[test]
    fn test_malformed_escapes() {
        assert!(matches!(decode_url("%zz"), Err(JlibError::Decode(_))));
        assert!(matches!(decode_url("abc%4"), Err(JlibError::Decode(_))));
        assert!(matches!(decode_url("%FF"), Err(JlibError::Decode(_))));
    }

    #[test]
    fn test_encode_url_sorts_query() {
        let encoded = encode_url("https://example.com/path?b=2&a=1 x").expect("encode should succeed");
        assert_eq!(encoded, "https://example.com/path?a=1+x&b=2");
    }

    #[test]
    fn test_encode_url_without_query() {
        let encoded = encode_url("https://example.com/a b").expect("encode should succeed");
        assert_eq!(encoded, "https://example.com/a%20b");
    }

    #[test]
    fn test_encode_rejects_bad_input() {
        assert!(matches!(encode_url("not a url"), Err(JlibError::Encode(_))));
        assert!(matches!(encode_url("\u{FFFD}"), Err(JlibError::Encode(_))));
        assert!(matches!(encode_url_component("\u{FFFD}"), Err(JlibError::Encode(_))));
    }
}
