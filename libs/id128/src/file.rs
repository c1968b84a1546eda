//! Reading and writing an id128 record as the whole contents of a named file.

use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::framed;
use crate::types::{Id128, Id128Format};

/// Mode for newly created id files: read-only for everyone.
pub const ID_FILE_MODE: u32 = 0o444;

/// Options for [`write_to_path_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Flush file data to disk after the record is written.
    pub sync: bool,
}

/// Reads the id128 stored in the file at `path`.
pub fn read_from_path(path: impl AsRef<Path>, format: Id128Format) -> Result<Id128> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NOCTTY)
        .open(path)
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "failed to open id file"))?;

    let id = framed::read_framed(&file, format)?;

    debug!(path = %path.display(), format = %format, id = %id, "read id file");
    Ok(id)
}

/// Writes `id` to the file at `path`, creating it with mode 0444 if needed.
///
/// An existing file is not truncated.
pub fn write_to_path(path: impl AsRef<Path>, format: Id128Format, id: &Id128) -> Result<()> {
    write_to_path_with(path, format, id, WriteOptions::default())
}

/// Like [`write_to_path`], optionally syncing the file before returning.
pub fn write_to_path_with(
    path: impl AsRef<Path>,
    format: Id128Format,
    id: &Id128,
    options: WriteOptions,
) -> Result<()> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .mode(ID_FILE_MODE)
        .custom_flags(libc::O_NOCTTY)
        .open(path)
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "failed to open id file"))?;

    let len = framed::write_framed(&file, format, id)?;
    if options.sync {
        file.sync_all()?;
    }

    debug!(
        path = %path.display(),
        format = %format,
        id = %id,
        bytes = len,
        sync = options.sync,
        "wrote id file"
    );
    Ok(())
}
