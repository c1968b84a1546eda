//! The id128 value type and the text format selector.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::Id128Error;

// =============================================================================
// Format selector
// =============================================================================

/// Text encoding of an id128.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Id128Format {
    /// Either encoding; the input length decides. Writes use [`Id128Format::Plain`].
    #[default]
    Any,
    /// 32 hex digits, no separators.
    Plain,
    /// 36 characters in `8-4-4-4-12` hyphenated groups.
    Uuid,
}

impl Id128Format {
    /// Length of the text form, or `None` for [`Id128Format::Any`].
    #[must_use]
    pub const fn text_len(self) -> Option<usize> {
        match self {
            Id128Format::Any => None,
            Id128Format::Plain => Some(codec::PLAIN_LEN),
            Id128Format::Uuid => Some(codec::UUID_LEN),
        }
    }

    /// Returns true if text observed in `observed` form satisfies this selector.
    #[must_use]
    pub fn accepts(self, observed: Id128Format) -> bool {
        self == Id128Format::Any || self == observed
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Id128Format::Any => "any",
            Id128Format::Plain => "plain",
            Id128Format::Uuid => "uuid",
        }
    }
}

impl fmt::Display for Id128Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Id128Format {
    type Err = Id128Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Id128Format::Any),
            "plain" => Ok(Id128Format::Plain),
            "uuid" => Ok(Id128Format::Uuid),
            _ => Err(Id128Error::invalid(
                "unknown format, expected one of: any, plain, uuid",
            )),
        }
    }
}

// =============================================================================
// Identifier
// =============================================================================

/// An opaque 128-bit identifier.
///
/// Equality is byte-wise. The derived ordering is lexicographic over the
/// bytes and carries no meaning beyond making ids usable as map keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id128([u8; 16]);

impl Id128 {
    /// The all-zero id.
    pub const NULL: Self = Self([0; 16]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Encodes as 32 lowercase hex digits.
    #[must_use]
    pub fn to_plain(&self) -> codec::PlainText {
        codec::encode_plain(self)
    }

    /// Encodes as a hyphenated 36-character UUID string.
    #[must_use]
    pub fn to_uuid(&self) -> codec::UuidText {
        codec::encode_uuid(self)
    }

    /// Decodes `s` in the given format.
    pub fn parse(s: &str, format: Id128Format) -> Result<Self, Id128Error> {
        codec::decode(s, format)
    }
}

impl fmt::Debug for Id128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id128({})", self.to_plain())
    }
}

/// Renders the plain form; `{:#}` renders the UUID form.
impl fmt::Display for Id128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.to_uuid())
        } else {
            f.write_str(&self.to_plain())
        }
    }
}

impl FromStr for Id128 {
    type Err = Id128Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode(s, Id128Format::Any)
    }
}

impl From<[u8; 16]> for Id128 {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Id128> for [u8; 16] {
    fn from(id: Id128) -> Self {
        id.0
    }
}

impl From<uuid::Uuid> for Id128 {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid.into_bytes())
    }
}

impl From<Id128> for uuid::Uuid {
    fn from(id: Id128) -> Self {
        uuid::Uuid::from_bytes(id.0)
    }
}

impl AsRef<[u8]> for Id128 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::Serialize for Id128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_plain())
    }
}

impl<'de> serde::Deserialize<'de> for Id128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        codec::decode(&s, Id128Format::Any).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ASCENDING: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    #[test]
    fn test_display_forms() {
        let id = Id128::from_bytes(ASCENDING);
        assert_eq!(id.to_string(), "00112233445566778899aabbccddeeff");
        assert_eq!(format!("{id:#}"), "00112233-4455-6677-8899-aabbccddeeff");
        assert_eq!(
            format!("{id:?}"),
            "Id128(00112233445566778899aabbccddeeff)"
        );
    }

    #[test]
    fn test_from_str_accepts_either_form() {
        let plain: Id128 = "00112233445566778899aabbccddeeff".parse().unwrap();
        let uuid: Id128 = "00112233-4455-6677-8899-aabbccddeeff".parse().unwrap();
        assert_eq!(plain, uuid);
        assert_eq!(plain.into_bytes(), ASCENDING);
    }

    #[test]
    fn test_null() {
        assert!(Id128::NULL.is_null());
        assert!(Id128::default().is_null());
        assert!(!Id128::from_bytes(ASCENDING).is_null());
    }

    #[test]
    fn test_uuid_conversion_preserves_bytes() {
        let uuid = uuid::Uuid::new_v4();
        let id = Id128::from(uuid);
        assert_eq!(id.as_bytes(), uuid.as_bytes());
        assert_eq!(uuid::Uuid::from(id), uuid);
        // Our hyphenated form matches the uuid crate's.
        assert_eq!(&*id.to_uuid(), uuid.hyphenated().to_string());
    }

    #[test]
    fn test_json_roundtrip() {
        let id = Id128::from_bytes(ASCENDING);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00112233445566778899aabbccddeeff\"");
        let parsed: Id128 = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);

        let from_uuid: Id128 =
            serde_json::from_str("\"00112233-4455-6677-8899-aabbccddeeff\"").unwrap();
        assert_eq!(id, from_uuid);

        assert!(serde_json::from_str::<Id128>("\"not-an-id\"").is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("any".parse::<Id128Format>().unwrap(), Id128Format::Any);
        assert_eq!("plain".parse::<Id128Format>().unwrap(), Id128Format::Plain);
        assert_eq!("uuid".parse::<Id128Format>().unwrap(), Id128Format::Uuid);
        assert!("UUID4".parse::<Id128Format>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_format_accepts() {
        assert!(Id128Format::Any.accepts(Id128Format::Plain));
        assert!(Id128Format::Any.accepts(Id128Format::Uuid));
        assert!(Id128Format::Plain.accepts(Id128Format::Plain));
        assert!(!Id128Format::Plain.accepts(Id128Format::Uuid));
        assert!(!Id128Format::Uuid.accepts(Id128Format::Plain));
    }
}
