//! SubDB content fingerprint.
//!
//! The service identifies a video by the MD5 of its first and last 64 KiB,
//! so the offsets and the digest must match exactly for lookups to hit.

use std::fmt;
use std::io::{self, SeekFrom};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::debug;

/// Size of each of the head and tail windows
pub const WINDOW_SIZE: u64 = 64 * 1024;

/// Smallest file that holds both windows
pub const MIN_FILE_SIZE: u64 = 2 * WINDOW_SIZE;

/// Lowercase hex MD5 digest identifying a video file to SubDB
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest raw bytes into a fingerprint
pub fn digest(data: &[u8]) -> Fingerprint {
    Fingerprint(format!("{:x}", md5::compute(data)))
}

/// Compute the fingerprint of a video file from its head and tail windows.
///
/// Files smaller than [`MIN_FILE_SIZE`] fail with `UnexpectedEof`; there is
/// no fallback to hashing whatever is available.
pub async fn compute<P: AsRef<Path>>(path: P) -> io::Result<Fingerprint> {
    let path = path.as_ref();
    let mut file = File::open(path).await?;

    let metadata = file.metadata().await?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        ));
    }

    let size = metadata.len();
    if size < MIN_FILE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("file is {} bytes, at least {} required", size, MIN_FILE_SIZE),
        ));
    }

    let window = WINDOW_SIZE as usize;
    let mut data = vec![0u8; 2 * window];
    file.read_exact(&mut data[..window]).await?;
    file.seek(SeekFrom::End(-(WINDOW_SIZE as i64))).await?;
    file.read_exact(&mut data[window..]).await?;

    let fingerprint = digest(&data);
    debug!("Fingerprint for {}: {}", path.display(), fingerprint);
    Ok(fingerprint)
}
