//! Live results document and tracker.
//!
//! At session start the tracker writes a JSON snapshot enumerating every
//! test node that will execute, each pre-populated with the default
//! outcome. Consumers poll or tail that file to observe run progress; the
//! record set is fixed for the whole session and only outcomes change.
//!
//! Document schema:
//!
//! ```json
//! {"tests": [{"nodeid": "suite/case::test_one", "outcome": "passed"}]}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PulseError, Result};
use crate::hooks::Session;

/// Outcome of a single test, as recorded in the live results document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The expected outcome; every record starts out as `passed`.
    #[default]
    Passed,
    Failed,
    Skipped,
    Error,
}

/// One per-test record in the live results document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub nodeid: String,
    pub outcome: Outcome,
}

/// The live results document: an ordered sequence of per-test records.
///
/// Established once per session by [`LiveResultsTracker::initialize`] and
/// never resized afterwards; outcomes are mutated in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LiveResults {
    pub tests: Vec<TestRecord>,
}

impl LiveResults {
    /// Updates the outcome of the record with the given node id, in place.
    ///
    /// Returns false when no record carries that node id; the record set is
    /// never grown here.
    pub fn set_outcome(&mut self, nodeid: &str, outcome: Outcome) -> bool {
        match self.tests.iter_mut().find(|r| r.nodeid == nodeid) {
            Some(record) => {
                record.outcome = outcome;
                true
            }
            None => false,
        }
    }
}

/// Writes and reads the live results document at one configured path.
///
/// The path is injected at construction rather than read from ambient
/// process state, so tests can point each tracker at an isolated file.
#[derive(Debug, Clone)]
pub struct LiveResultsTracker {
    path: PathBuf,
}

impl LiveResultsTracker {
    /// Creates a tracker writing its document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the initial document for a session: one record per concrete
    /// test-function item, in item iteration order, each with the default
    /// `passed` outcome.
    ///
    /// A session without an items collection degrades to an empty document.
    /// Grouping and setup nodes are excluded. Any prior document content is
    /// fully replaced.
    pub fn initialize(&self, session: &dyn Session) -> Result<LiveResults> {
        let tests = session
            .items()
            .unwrap_or_default()
            .into_iter()
            .filter(|item| item.is_test_function())
            .map(|item| TestRecord {
                nodeid: item.node_id().to_string(),
                outcome: Outcome::Passed,
            })
            .collect();

        let results = LiveResults { tests };
        self.write(&results)?;
        Ok(results)
    }

    /// Atomically replaces the document on disk.
    ///
    /// The document is serialized in full, written to a sibling temp file,
    /// and renamed into place, so a failure never leaves a partial document
    /// at the configured path.
    pub fn write(&self, results: &LiveResults) -> Result<()> {
        let json = serde_json::to_string(results)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| PulseError::results_io(&self.path, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| PulseError::results_io(&self.path, e))
    }

    /// Loads the current document from disk.
    pub fn read(&self) -> Result<LiveResults> {
        let json =
            fs::read_to_string(&self.path).map_err(|e| PulseError::results_io(&self.path, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
