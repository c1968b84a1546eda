//! # plfm-id128
//!
//! Codec and single-record persistence for 128-bit identifiers, such as
//! machine and boot ids.
//!
//! ## Text Forms
//!
//! An id has two text encodings:
//!
//! - plain: `00112233445566778899aabbccddeeff` (32 hex digits)
//! - uuid: `00112233-4455-6677-8899-aabbccddeeff` (36 characters)
//!
//! Both are written in lowercase and decoded case-insensitively.
//!
//! ## Validation
//!
//! [`is_valid`] is a cheap shape filter that accepts any ASCII letter where a
//! hex digit is expected. [`decode`] is the strict check: text that passes
//! [`is_valid`] may still fail to decode.
//!
//! ## Files
//!
//! An id file holds exactly one record: the text form, a newline, and
//! nothing else. [`read_from_path`] and [`write_to_path`] handle files by
//! name; [`read_framed`] and [`write_framed`] work over any reader or writer.

mod codec;
mod error;
mod file;
mod framed;
mod types;
mod validate;

pub use codec::{decode, encode_plain, encode_uuid, PlainText, UuidText, PLAIN_LEN, UUID_LEN};
pub use error::{Id128Error, Result};
pub use file::{read_from_path, write_to_path, write_to_path_with, WriteOptions, ID_FILE_MODE};
pub use framed::{read_framed, write_framed, PLAIN_FRAME_LEN, UUID_FRAME_LEN};
pub use types::{Id128, Id128Format};
pub use validate::{classify, is_valid};
