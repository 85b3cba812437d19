//! Local copies of every rendered report.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use tracing::info;

use crate::error::RuntimeError;
use crate::report::Report;

pub struct ReportArchive {
    dir: PathBuf,
}

impl ReportArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `newsletter_YYYYmmdd_HHMMSS.html`, creating the directory if needed.
    pub async fn save(&self, report: &Report, at: NaiveDateTime) -> Result<PathBuf, RuntimeError> {
        let path = self
            .dir
            .join(format!("newsletter_{}.html", at.format("%Y%m%d_%H%M%S")));

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| RuntimeError::Archive {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, report.html.as_bytes())
            .await
            .map_err(|source| RuntimeError::Archive {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), "ReportArchive: saved local copy");
        Ok(path)
    }
}
