//! Single-record framing: the id128 text followed by a newline, nothing else.
//!
//! ```text
//! 00112233445566778899aabbccddeeff\n             (33 bytes, plain)
//! 00112233-4455-6677-8899-aabbccddeeff\n         (37 bytes, uuid)
//! ```

use std::io::{self, Read, Write};

use tracing::trace;

use crate::codec::{self, PLAIN_LEN, UUID_LEN};
use crate::error::{Id128Error, Result};
use crate::types::{Id128, Id128Format};

/// Frame length of a plain record.
pub const PLAIN_FRAME_LEN: usize = PLAIN_LEN + 1;

/// Frame length of a UUID record.
pub const UUID_FRAME_LEN: usize = UUID_LEN + 1;

/// One byte more than the longest frame, so trailing garbage shows up as a
/// length mismatch instead of being silently left unread.
const READ_BUF_LEN: usize = UUID_FRAME_LEN + 1;

/// Reads one framed id128 from `reader`.
///
/// The reader must hold exactly one record and nothing more.
pub fn read_framed<R: Read>(mut reader: R, format: Id128Format) -> Result<Id128> {
    let mut buf = [0u8; READ_BUF_LEN];
    let len = read_up_to(&mut reader, &mut buf)?;

    trace!(len, format = %format, "read id128 frame");

    let observed = match len {
        0 => return Err(Id128Error::NoMedium),
        PLAIN_FRAME_LEN => Id128Format::Plain,
        UUID_FRAME_LEN => Id128Format::Uuid,
        _ => return Err(Id128Error::invalid("id128 record has the wrong length")),
    };

    if !format.accepts(observed) {
        return Err(Id128Error::invalid("id128 record is not in the requested format"));
    }

    let (text, terminator) = buf[..len].split_at(len - 1);
    if terminator != b"\n" {
        return Err(Id128Error::invalid("id128 record is not newline terminated"));
    }

    codec::decode(text, observed)
}

/// Writes `id` to `writer` as one frame and returns the number of bytes written.
///
/// [`Id128Format::Any`] writes the plain form.
pub fn write_framed<W: Write>(mut writer: W, format: Id128Format, id: &Id128) -> Result<usize> {
    let mut buf = [0u8; UUID_FRAME_LEN];

    let len = match format {
        Id128Format::Uuid => {
            buf[..UUID_LEN].copy_from_slice(codec::encode_uuid(id).as_bytes());
            UUID_FRAME_LEN
        }
        Id128Format::Plain | Id128Format::Any => {
            buf[..PLAIN_LEN].copy_from_slice(codec::encode_plain(id).as_bytes());
            PLAIN_FRAME_LEN
        }
    };
    buf[len - 1] = b'\n';

    write_exact(&mut writer, &buf[..len])?;

    trace!(len, format = %format, "wrote id128 frame");

    Ok(len)
}

/// Fills `buf` until it is full or the reader reports end of file.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

/// Writes all of `buf`, failing with [`Id128Error::ShortWrite`] if the writer stalls.
fn write_exact<W: Write>(writer: &mut W, buf: &[u8]) -> Result<()> {
    let mut written = 0;

    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => {
                return Err(Id128Error::ShortWrite {
                    written,
                    expected: buf.len(),
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    writer.flush()?;
    Ok(())
}
