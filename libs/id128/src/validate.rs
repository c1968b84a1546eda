//! Shape check for untrusted id128 text.
//!
//! This is a coarse length and character-class filter. It accepts every ASCII
//! letter, not only `a-f`, so text that passes here can still be rejected by
//! [`crate::decode`], which is the authoritative hex check.

use crate::codec::{PLAIN_LEN, UUID_LEN};
use crate::types::Id128Format;

/// Character offsets of the hyphens in the UUID text form.
pub(crate) const UUID_HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Returns true if `text` has the shape of a plain or UUID id128.
///
/// Total over all inputs: empty buffers, arbitrary lengths and embedded NUL
/// bytes simply yield `false`.
#[must_use]
pub fn is_valid(text: impl AsRef<[u8]>) -> bool {
    classify(text).is_some()
}

/// Returns the text form `text` appears to be in, if any.
#[must_use]
pub fn classify(text: impl AsRef<[u8]>) -> Option<Id128Format> {
    let text = text.as_ref();

    match text.len() {
        PLAIN_LEN => text
            .iter()
            .all(u8::is_ascii_alphanumeric)
            .then_some(Id128Format::Plain),
        UUID_LEN => text
            .iter()
            .enumerate()
            .all(|(i, c)| {
                if UUID_HYPHEN_OFFSETS.contains(&i) {
                    *c == b'-'
                } else {
                    c.is_ascii_alphanumeric()
                }
            })
            .then_some(Id128Format::Uuid),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_shape() {
        assert!(is_valid("00112233445566778899aabbccddeeff"));
        assert!(is_valid("00112233445566778899AABBCCDDEEFF"));
        assert_eq!(
            classify("00112233445566778899aabbccddeeff"),
            Some(Id128Format::Plain)
        );
    }

    #[test]
    fn test_plain_accepts_any_letter() {
        assert!(is_valid("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(is_valid("0123456789ghijklmnopqrstuvwxyzGZ"));
    }

    #[test]
    fn test_plain_rejects_punctuation() {
        assert!(!is_valid("00112233445566778899aabbccddeef-"));
        assert!(!is_valid("00112233445566778899aabbccddeef "));
        assert!(!is_valid("00112233445566778899aabbccddeef\0"));
    }

    #[test]
    fn test_uuid_shape() {
        assert!(is_valid("00112233-4455-6677-8899-aabbccddeeff"));
        assert_eq!(
            classify("00112233-4455-6677-8899-aabbccddeeff"),
            Some(Id128Format::Uuid)
        );
        // Permissive letters are accepted here too.
        assert!(is_valid("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"));
    }

    #[test]
    fn test_uuid_hyphen_misplaced() {
        assert!(!is_valid("0011223-34455-6677-8899-aabbccddeeff"));
        assert!(!is_valid("00112233-4455-6677-8899a-abbccddeeff"));
        assert!(!is_valid("00112233x4455x6677x8899xaabbccddeeff"));
        // 36 characters with no hyphens at all.
        assert!(!is_valid("00112233445566778899aabbccddeeff0011"));
    }

    #[test]
    fn test_other_lengths() {
        assert!(!is_valid(""));
        assert!(!is_valid("0"));
        assert!(!is_valid("00112233445566778899aabbccddeef"));
        assert!(!is_valid("00112233445566778899aabbccddeeff0"));
        assert!(!is_valid("00112233-4455-6677-8899-aabbccddeef"));
        assert!(!is_valid("00112233-4455-6677-8899-aabbccddeeff0"));
        assert_eq!(classify("not-a-valid-id"), None);
    }
}
