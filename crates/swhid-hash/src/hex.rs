use crate::HashError;

const ENCODE: &[u8; 16] = b"0123456789abcdef";

/// ASCII byte to nibble value; `None` for non-hex bytes.
fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Hex-encode `bytes` to a lowercase `String`.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(ENCODE[(b >> 4) as usize] as char);
        out.push(ENCODE[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string into `buf`. The string length must be exactly
/// `buf.len() * 2`. Accepts both cases.
pub fn decode(hex: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let hex = hex.as_bytes();
    if hex.len() != buf.len() * 2 {
        return Err(HashError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: hex.len(),
        });
    }
    for (i, slot) in buf.iter_mut().enumerate() {
        let hi = nibble(hex[i * 2]).ok_or(HashError::InvalidHex {
            position: i * 2,
            character: hex[i * 2] as char,
        })?;
        let lo = nibble(hex[i * 2 + 1]).ok_or(HashError::InvalidHex {
            position: i * 2 + 1,
            character: hex[i * 2 + 1] as char,
        })?;
        *slot = (hi << 4) | lo;
    }
    Ok(())
}

/// Whether `s` consists only of lowercase hex digits.
///
/// Stricter than [`decode`]: uppercase digits fail, matching the identifier
/// grammar's `[0-9a-f]` character class.
pub fn is_lower_hex(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_lowercase() {
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0xff]), "deadbeef00ff");
    }

    #[test]
    fn decode_roundtrip() {
        let mut buf = [0u8; 6];
        decode("deadbeef00ff", &mut buf).unwrap();
        assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef, 0x00, 0xff]);
    }

    #[test]
    fn decode_accepts_mixed_case() {
        let mut buf = [0u8; 4];
        decode("DeAdBeEf", &mut buf).unwrap();
        assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_rejects_bad_char() {
        let mut buf = [0u8; 4];
        let err = decode("deadgoof", &mut buf).unwrap_err();
        match err {
            HashError::InvalidHex {
                position: 4,
                character: 'g',
            } => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let mut buf = [0u8; 4];
        let err = decode("abc", &mut buf).unwrap_err();
        assert!(matches!(err, HashError::InvalidHexLength { expected: 8, actual: 3 }));
    }

    #[test]
    fn lower_hex_check() {
        assert!(is_lower_hex("deadbeef"));
        assert!(is_lower_hex("0123456789abcdef"));
        assert!(!is_lower_hex("DEADBEEF"));
        assert!(!is_lower_hex("xyz"));
        assert!(!is_lower_hex(""));
    }
}
