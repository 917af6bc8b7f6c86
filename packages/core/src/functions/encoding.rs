//! Base64 and URL codecs

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{JlibError, JlibResult};

/// Standard, padded base64 encoding of the string's UTF-8 bytes
#[must_use]
pub fn base64_encode(s: &str) -> String {
    STANDARD.encode(s)
}

/// Decode standard base64 into a UTF-8 string
///
/// # Errors
///
/// Returns `JlibError::Decode` for invalid base64 or non UTF-8 output.
pub fn base64_decode(s: &str) -> JlibResult<String> {
    let bytes = STANDARD
        .decode(s)
        .map_err(|e| JlibError::decode(format!("invalid base64 input: {e}")))?;
    String::from_utf8(bytes).map_err(|e| JlibError::decode(format!("decoded base64 is not UTF-8: {e}")))
}

/// Decode a URL or URL component: `+` becomes a space and `%XX` escapes are
/// resolved
///
/// # Errors
///
/// Returns `JlibError::Decode` for malformed escapes or non UTF-8 output.
pub fn decode_url(s: &str) -> JlibResult<String> {
    let bytes = s.as_bytes();
    for (i, _) in s.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (i + 3).min(s.len());
            return Err(JlibError::decode(format!(
                "invalid URL escape {:?}",
                String::from_utf8_lossy(&bytes[i..end])
            )));
        }
    }

    urlencoding::decode(&s.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|e| JlibError::decode(format!("decoded URL is not UTF-8: {e}")))
}

/// Escape a string for use inside a URL query: unreserved characters are
/// kept, spaces become `+`, everything else is percent-encoded
///
/// # Errors
///
/// Returns `JlibError::Encode` for the lone replacement character, which
/// stands for input that was not valid text to begin with.
pub fn encode_url_component(s: &str) -> JlibResult<String> {
    reject_replacement_char(s)?;
    Ok(urlencoding::encode(s).replace("%20", "+"))
}

/// Normalize an absolute URL, re-encoding its query with keys in sorted order
///
/// # Errors
///
/// Returns `JlibError::Encode` if `s` is not an absolute URL.
pub fn encode_url(s: &str) -> JlibResult<String> {
    reject_replacement_char(s)?;

    let mut url = url::Url::parse(s).map_err(|e| JlibError::encode(format!("{s:?}: {e}")))?;

    if url.query().is_some() {
        let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        // Stable sort keeps repeated keys in their original order
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }

    Ok(url.into())
}

fn reject_replacement_char(s: &str) -> JlibResult<()> {
    if s == "\u{FFFD}" {
        return Err(JlibError::encode("invalid character"));
    }
    Ok(())
}
