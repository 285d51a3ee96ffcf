use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, SubgrabError};
use crate::fetch::{SubtitleFetcher, SubtitleFetcherFactory};
use crate::fingerprint;
use crate::subtitle;

/// What happened to a single input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Extension is not in the allow-list; nothing was read or written
    Unsupported { extension: String },
    /// A subtitle already sits next to the video; the service was not queried
    AlreadyExists(PathBuf),
    /// A new subtitle was written at this path
    Downloaded(PathBuf),
}

/// Per-file results of a run, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<(PathBuf, Result<FileOutcome>)>,
}

impl BatchReport {
    pub fn downloaded(&self) -> usize {
        self.count(|outcome| matches!(outcome, Ok(FileOutcome::Downloaded(_))))
    }

    pub fn existing(&self) -> usize {
        self.count(|outcome| matches!(outcome, Ok(FileOutcome::AlreadyExists(_))))
    }

    pub fn unsupported(&self) -> usize {
        self.count(|outcome| matches!(outcome, Ok(FileOutcome::Unsupported { .. })))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| outcome.is_err())
    }

    fn count<F: Fn(&Result<FileOutcome>) -> bool>(&self, predicate: F) -> usize {
        self.entries.iter().filter(|(_, outcome)| predicate(outcome)).count()
    }
}

pub struct Workflow {
    config: Config,
    fetcher: Box<dyn SubtitleFetcher>,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = SubtitleFetcherFactory::create_fetcher(config.service.clone())?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Box<dyn SubtitleFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Process every argument in order, one file at a time
    pub async fn process_paths<P: AsRef<Path>>(&self, paths: &[P]) -> BatchReport {
        let mut report = BatchReport::default();

        for path in paths {
            self.process_path(path.as_ref(), &mut report).await;
        }

        info!(
            "Finished: {} downloaded, {} already present, {} unsupported, {} failed",
            report.downloaded(), report.existing(), report.unsupported(), report.failed()
        );
        report
    }

    /// Process a single argument: walk it when it is a directory, otherwise
    /// treat it as a file
    pub async fn process_path(&self, path: &Path, report: &mut BatchReport) {
        if !path.is_dir() {
            self.record(path.to_path_buf(), report).await;
            return;
        }

        info!("Scanning directory: {}", path.display());
        // Enumerate before writing so new subtitles are not picked up by the walk
        let mut files = Vec::new();
        for entry in WalkDir::new(path) {
            match entry {
                // Symlinks are not followed, so links to directories are skipped here
                Ok(entry) if !entry.file_type().is_dir() && !entry.path().is_dir() => {
                    files.push(entry.into_path())
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry under {}: {}", path.display(), e),
            }
        }

        info!("Found {} files to check", files.len());
        for file in files {
            self.record(file, report).await;
        }
    }

    async fn record(&self, path: PathBuf, report: &mut BatchReport) {
        let outcome = self.process_file(&path).await;
        log_outcome(&path, &outcome);
        report.entries.push((path, outcome));
    }

    /// Run the fingerprint, fetch and write pipeline for one file
    pub async fn process_file(&self, video_path: &Path) -> Result<FileOutcome> {
        if !self.config.scan.is_video(video_path) {
            let extension = video_path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();
            return Ok(FileOutcome::Unsupported { extension });
        }

        let subtitle_path = subtitle::sibling_path(video_path);
        if subtitle::exists(&subtitle_path).await {
            return Ok(FileOutcome::AlreadyExists(subtitle_path));
        }

        let fingerprint = fingerprint::compute(video_path).await
            .map_err(SubgrabError::Fingerprint)?;
        let content = self.fetcher.fetch(&fingerprint).await?;
        subtitle::write_subtitle(&subtitle_path, &content).await?;

        Ok(FileOutcome::Downloaded(subtitle_path))
    }
}

fn log_outcome(video_path: &Path, outcome: &Result<FileOutcome>) {
    let base_name = video_path.with_extension("");
    match outcome {
        Ok(FileOutcome::Unsupported { extension }) => {
            info!("{} is not a valid video format.", extension);
        }
        Ok(FileOutcome::AlreadyExists(_)) => {
            info!("Subtitle for {} already exists.", base_name.display());
        }
        Ok(FileOutcome::Downloaded(_)) => {
            info!("Downloaded subtitle for {} successfully.", base_name.display());
        }
        Err(e) => {
            let file_name = video_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| video_path.display().to_string());
            error!("Cannot find subtitles for {}. Error: {}", file_name, e);
        }
    }
}
