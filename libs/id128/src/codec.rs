//! Binary to text conversion for both id128 text forms.

use std::fmt;
use std::ops::Deref;

use crate::error::{Id128Error, Result};
use crate::types::{Id128, Id128Format};
use crate::validate::{self, UUID_HYPHEN_OFFSETS};

/// Length of the plain text form.
pub const PLAIN_LEN: usize = 32;

/// Length of the UUID text form.
pub const UUID_LEN: usize = 36;

/// Byte indices that are preceded by a hyphen in the UUID text form.
///
/// These index the 16 id bytes, not the output characters; they land the
/// hyphens at character offsets 8, 13, 18 and 23.
const UUID_HYPHEN_BYTE_INDICES: [usize; 4] = [4, 6, 8, 10];

macro_rules! text_form {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            #[must_use]
            pub fn as_str(&self) -> &str {
                // The encoders in this module only write ASCII hex digits and '-'.
                let text = std::str::from_utf8(&self.0);
                debug_assert!(text.is_ok());
                text.unwrap_or_default()
            }

            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                self.as_str()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self.as_str(), f)
            }
        }
    };
}

text_form!(
    /// Plain text form: 32 lowercase hex digits.
    PlainText,
    PLAIN_LEN
);

text_form!(
    /// UUID text form: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, lowercase.
    UuidText,
    UUID_LEN
);

/// Encodes `id` as 32 lowercase hex digits.
#[must_use]
pub fn encode_plain(id: &Id128) -> PlainText {
    let mut buf = [0u8; PLAIN_LEN];
    // Output is exactly twice the input length, so this cannot fail.
    let encoded = hex::encode_to_slice(id.as_bytes(), &mut buf);
    debug_assert!(encoded.is_ok());
    PlainText(buf)
}

/// Encodes `id` in the hyphenated UUID form.
#[must_use]
pub fn encode_uuid(id: &Id128) -> UuidText {
    let mut buf = [0u8; UUID_LEN];
    let mut k = 0;

    for (n, byte) in id.as_bytes().iter().enumerate() {
        if UUID_HYPHEN_BYTE_INDICES.contains(&n) {
            buf[k] = b'-';
            k += 1;
        }

        let encoded = hex::encode_to_slice([*byte], &mut buf[k..k + 2]);
        debug_assert!(encoded.is_ok());
        k += 2;
    }

    debug_assert_eq!(k, UUID_LEN);
    UuidText(buf)
}

/// Decodes `text` in `format` into an id.
///
/// The shape must match the requested format (with [`Id128Format::Any`] the
/// length picks one), and every non-separator character must be a hex digit.
pub fn decode(text: impl AsRef<[u8]>, format: Id128Format) -> Result<Id128> {
    let text = text.as_ref();

    let observed = validate::classify(text)
        .ok_or(Id128Error::invalid("malformed id128 text"))?;
    if !format.accepts(observed) {
        return Err(Id128Error::invalid("id128 text is not in the requested format"));
    }

    let mut bytes = [0u8; 16];
    match observed {
        Id128Format::Uuid => {
            let mut n = 0;
            let mut i = 0;
            while i < UUID_LEN {
                if UUID_HYPHEN_OFFSETS.contains(&i) {
                    i += 1;
                    continue;
                }
                decode_pair(&text[i..i + 2], &mut bytes[n..n + 1])?;
                n += 1;
                i += 2;
            }
        }
        _ => decode_pair(text, &mut bytes)?,
    }

    Ok(Id128::from_bytes(bytes))
}

fn decode_pair(hex_text: &[u8], out: &mut [u8]) -> Result<()> {
    hex::decode_to_slice(hex_text, out).map_err(|_| Id128Error::invalid("non-hex digit in id128"))
}
