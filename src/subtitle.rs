use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{Result, SubgrabError};

/// Extension of downloaded subtitle files
pub const SUBTITLE_EXTENSION: &str = "srt";

/// Subtitle path next to a video: same directory and stem, `.srt` extension
pub fn sibling_path<P: AsRef<Path>>(video_path: P) -> PathBuf {
    video_path.as_ref().with_extension(SUBTITLE_EXTENSION)
}

/// Whether anything already occupies the subtitle path
pub async fn exists<P: AsRef<Path>>(subtitle_path: P) -> bool {
    fs::metadata(subtitle_path).await.is_ok()
}

/// Write subtitle bytes verbatim, creating or truncating the file
pub async fn write_subtitle<P: AsRef<Path>>(subtitle_path: P, content: &[u8]) -> Result<()> {
    let subtitle_path = subtitle_path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), subtitle_path.display());

    fs::write(subtitle_path, content).await
        .map_err(SubgrabError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_path() {
        assert_eq!(sibling_path("/videos/movie.mkv"), PathBuf::from("/videos/movie.srt"));
        assert_eq!(sibling_path("show.s01e01.mp4"), PathBuf::from("show.s01e01.srt"));
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.srt");
        assert!(!exists(&path).await);

        std::fs::write(&path, b"1").unwrap();
        assert!(exists(&path).await);
    }

    #[tokio::test]
    async fn test_write_subtitle_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.srt");
        let content = b"1\n00:00:01 --> 00:00:02\nHello";

        write_subtitle(&path, content).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), content);
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("movie.srt");

        let err = write_subtitle(&path, b"1").await.unwrap_err();
        assert!(matches!(err, SubgrabError::Write(_)));
    }
}
