use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::StorageError;

/// Writes `bytes` to a temp file next to `path`, syncs it, then renames it
/// over `path`. A concurrent reader sees either the old file or the new one,
/// never a half-written file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    // same directory, so the rename stays on one filesystem
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp).or(Err(StorageError::FileCreationFailed))?;
    file.write_all(bytes).or(Err(StorageError::DataWriteFailed))?;
    file.sync_all().or(Err(StorageError::DataWriteFailed))?;
    fs::rename(&tmp, path).or(Err(StorageError::ReplaceFailed))?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
