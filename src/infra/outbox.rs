use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::infra::{contracts::DataSink, error::AppError};

/// Appends each delivered payload as one line of a JSON-lines file.
#[derive(Debug, Clone)]
pub struct JsonLinesOutbox {
    path: PathBuf,
}

impl JsonLinesOutbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, data: &str) -> Result<(), AppError> {
        let write_error = |source| AppError::OutboxWrite {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_error)?;

        writeln!(file, "{data}").map_err(write_error)
    }
}

impl DataSink for JsonLinesOutbox {
    fn deliver(&mut self, data: &str) -> Result<()> {
        self.append(data)?;
        tracing::debug!(path = %self.path.display(), "payload appended to outbox");
        Ok(())
    }
}
