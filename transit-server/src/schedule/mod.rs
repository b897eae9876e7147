//! The static schedule and its lookup index.
//!
//! The schedule arrives already parsed from an external loader as four
//! flat tables shaped like GTFS `stops`, `routes`, `trips` and
//! `stop_times`. It is indexed once; queries then run against the
//! immutable [`ScheduleIndex`].

mod builder;
mod handle;
mod index;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Route, Stop, StopTime, Trip};

pub use builder::ScheduleBuilder;
pub use handle::ScheduleHandle;
pub use index::ScheduleIndex;

/// Errors loading a schedule snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The snapshot file could not be read
    #[error("failed to read schedule {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON for the expected tables
    #[error("invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The background load task panicked or was cancelled
    #[error("schedule load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The four schedule tables, unindexed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub stops: Vec<Stop>,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default)]
    pub trips: Vec<Trip>,

    #[serde(default)]
    pub stop_times: Vec<StopTime>,
}

impl Schedule {
    /// Read a JSON snapshot of the tables.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a JSON snapshot from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(file))
    }
}
