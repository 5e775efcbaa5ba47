//! Modified UTF-8 decoding for constant pool strings.
//!
//! Class files store strings in the modified UTF-8 encoding of JVMS 4.4.7, which differs
//! from standard UTF-8 in two ways: the NUL character is encoded as the two-byte sequence
//! `C0 80` (so encoded strings never contain a zero byte), and characters outside the basic
//! multilingual plane are encoded as a UTF-16 surrogate pair with each surrogate in its own
//! three-byte sequence (four-byte sequences never appear). Decoding therefore goes through
//! UTF-16 code units rather than straight to UTF-8.
//!
//! Malformed encodings are parse errors; a class file carrying them is corrupt.

use crate::Result;

/// Decode a modified UTF-8 byte sequence into a `String`.
///
/// # Arguments
/// * `bytes` - The raw bytes of a `CONSTANT_Utf8_info` payload
///
/// # Errors
/// Returns [`crate::Error::Malformed`] for zero bytes, four-byte sequences, truncated or
/// invalid continuation bytes, and unpaired surrogates.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let first = bytes[pos];

        // 1-byte group: 0xxxxxxx, excluding 0x00 which must be encoded as C0 80
        if first & 0x80 == 0 {
            if first == 0 {
                return Err(malformed_error!(
                    "Embedded zero byte at offset {} in modified UTF-8",
                    pos
                ));
            }
            units.push(u16::from(first));
            pos += 1;
            continue;
        }

        // 2-byte group: 110xxxxx 10xxxxxx
        if first & 0xE0 == 0xC0 {
            let second = continuation(bytes, pos + 1)?;
            units.push((u16::from(first & 0x1F) << 6) | u16::from(second));
            pos += 2;
            continue;
        }

        // 3-byte group: 1110xxxx 10xxxxxx 10xxxxxx
        if first & 0xF0 == 0xE0 {
            let second = continuation(bytes, pos + 1)?;
            let third = continuation(bytes, pos + 2)?;
            units.push(
                (u16::from(first & 0x0F) << 12) | (u16::from(second) << 6) | u16::from(third),
            );
            pos += 3;
            continue;
        }

        // Four-byte sequences do not exist in modified UTF-8 (JVMS 4.4.7)
        return Err(malformed_error!(
            "Invalid modified UTF-8 lead byte {:#04x} at offset {}",
            first,
            pos
        ));
    }

    String::from_utf16(&units)
        .map_err(|_| malformed_error!("Unpaired surrogate in modified UTF-8 string"))
}

fn continuation(bytes: &[u8], pos: usize) -> Result<u8> {
    match bytes.get(pos) {
        Some(&byte) if byte & 0xC0 == 0x80 => Ok(byte & 0x3F),
        Some(&byte) => Err(malformed_error!(
            "Invalid modified UTF-8 continuation byte {:#04x} at offset {}",
            byte,
            pos
        )),
        None => Err(malformed_error!("Truncated modified UTF-8 sequence")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(decode(b"<init>").unwrap(), "<init>");
        assert_eq!(decode(b"").unwrap(), "");
    }

    #[test]
    fn two_byte_nul() {
        // NUL is encoded as C0 80, never as a raw zero byte
        assert_eq!(decode(&[0x61, 0xC0, 0x80, 0x62]).unwrap(), "a\u{0}b");
        assert!(decode(&[0x61, 0x00]).is_err());
    }

    #[test]
    fn two_and_three_byte_groups() {
        // U+00A2 CENT SIGN, U+20AC EURO SIGN
        assert_eq!(decode(&[0xC2, 0xA2]).unwrap(), "\u{A2}");
        assert_eq!(decode(&[0xE2, 0x82, 0xAC]).unwrap(), "\u{20AC}");
    }

    #[test]
    fn supplementary_pair() {
        // U+1F600 as a surrogate pair, each half a 3-byte group
        let bytes = [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80];
        assert_eq!(decode(&bytes).unwrap(), "\u{1F600}");
    }

    #[test]
    fn lone_surrogate() {
        let bytes = [0xED, 0xA0, 0xBD];
        assert!(decode(&bytes).is_err());
    }

    #[test]
    fn four_byte_lead_rejected() {
        assert!(decode(&[0xF0, 0x9F, 0x98, 0x80]).is_err());
    }

    #[test]
    fn truncated_sequence() {
        assert!(decode(&[0xC2]).is_err());
        assert!(decode(&[0xE2, 0x82]).is_err());
    }

    #[test]
    fn bad_continuation() {
        assert!(decode(&[0xC2, 0xC2]).is_err());
    }
}
