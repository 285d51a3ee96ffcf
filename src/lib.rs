//! Subgrab - SubDB Subtitle Downloader
//!
//! Fingerprints video files, looks them up on SubDB and writes the returned
//! subtitles next to each video as `.srt`.

pub mod cli;
pub mod config;
pub mod workflow;
pub mod fingerprint;
pub mod fetch;
pub mod subtitle;
pub mod logging;
pub mod error;
