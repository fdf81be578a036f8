use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::record::ListingRecord;
use crate::error::Result;
use crate::ports::sink::RecordSink;

/// Writes one record per line to a JSONL file.
///
/// Every record is flushed before `write` returns, so a failure is reported
/// against the record that caused it and earlier lines are already on disk.
pub struct JsonlFileSink {
    path: PathBuf,
    file: File,
}

impl JsonlFileSink {
    /// Open `path`, creating parent directories. With `append` unset an
    /// existing file is truncated.
    pub async fn open(path: impl AsRef<Path>, append: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(&path).await?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSink for JsonlFileSink {
    async fn write(&mut self, record: &ListingRecord) -> Result<()> {
        let line = record.to_json_line()?;
        self.file.write_all(line.as_bytes()).await?;
        self.file.flush().await?;
        Ok(())
    }

    async fn flush(&mut self) -> Result<()> {
        self.file.flush().await?;
        Ok(())
    }
}
