//! # Base64 Encoding
//!
//! Standard base64 and `data:` URLs, the format the backend stores images in
//! (product photos, avatars, company logo).

use base64::{Engine as _, engine::general_purpose};

/// Encode bytes to a standard (padded) base64 string.
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Build `data:<mime>;base64,<payload>`.
pub fn data_url_encode(mime: &str, content: impl AsRef<[u8]>) -> String {
    format!("data:{};base64,{}", mime, b64_encode(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_encode_prefix() {
        let url = data_url_encode("image/png", [0x89, b'P', b'N', b'G']);
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_b64_encode_is_padded() {
        assert_eq!(b64_encode("hi"), "aGk=");
    }
}
