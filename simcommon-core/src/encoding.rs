//! Base64 helpers

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode bytes as standard base64
pub fn encode(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}

/// Decode a standard base64 string
pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn encode_simple() {
        assert_eq!(encode("123abc"), "MTIzYWJj");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn decode_roundtrip() {
        let data = b"binary\x00\xffpayload";
        assert_eq!(decode(encode(data)).unwrap(), data);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("not base64!!"), Err(Error::Decode(_))));
    }
}
