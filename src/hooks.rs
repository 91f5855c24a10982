//! Host hook surface.
//!
//! The test-running host owns discovery, scheduling, and reporting; this
//! crate is invoked as synchronous callbacks on the host's thread. The host's
//! session and item objects are consumed through the narrow capability traits
//! here rather than any concrete host type, so any object with a node id,
//! ordered tags, and an optional parent satisfies the contract.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::errors::Result;
use crate::live::{LiveResults, LiveResultsTracker, Outcome};
use crate::marker::resolve_marker;

/// Capability view of a host test item.
pub trait TestNode {
    /// Unique, path-like node identifier.
    fn node_id(&self) -> &str;

    /// Tags declared directly on this node, in declaration order.
    /// Inherited tags are reached through [`TestNode::parent`], not here.
    fn own_tags(&self) -> &[String];

    /// The enclosing grouping node (module/class), if any.
    fn parent(&self) -> Option<&dyn TestNode>;

    /// True for a concrete, executable test function, false for grouping
    /// or setup nodes. Only test functions enter the live results document.
    fn is_test_function(&self) -> bool;
}

/// Capability view of a host session.
pub trait Session {
    /// The items selected for this session, in scheduling order.
    ///
    /// `None` means the collection phase has not produced an items
    /// collection at all; callers treat that the same as an empty one.
    fn items(&self) -> Option<Vec<&dyn TestNode>>;
}

/// Per-test completion payload delivered by the host.
///
/// Accepted by [`runtest_metadata`] for host-API parity; the outcome is
/// consumed by whatever maintains the live results document downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallInfo {
    pub outcome: Outcome,
}

/// Metadata key under which the resolved marker label is recorded.
pub const CREATED_WITH_KEY: &str = "created_with";

/// Builds the metadata fragment merged into the host's per-test report.
///
/// Always contains [`CREATED_WITH_KEY`] mapped to the resolved marker label,
/// or the `"MN"` sentinel when no recognized marker applies.
pub fn runtest_metadata(item: &dyn TestNode, _call: &CallInfo) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert(
        CREATED_WITH_KEY.to_string(),
        Value::String(resolve_marker(item).to_string()),
    );
    metadata
}

/// Facade wiring the lifecycle hooks to one live-results tracker.
///
/// One plugin per session; all callbacks run on the host's single execution
/// thread. If the host ever parallelizes, the write path needs external
/// synchronization.
#[derive(Debug)]
pub struct PulsePlugin {
    tracker: LiveResultsTracker,
}

impl PulsePlugin {
    /// Creates a plugin writing its live results document at `results_path`.
    pub fn new(results_path: impl Into<PathBuf>) -> Self {
        Self {
            tracker: LiveResultsTracker::new(results_path),
        }
    }

    /// The tracker this plugin writes through.
    pub fn tracker(&self) -> &LiveResultsTracker {
        &self.tracker
    }

    /// Session-start hook: writes the initial live results document.
    ///
    /// A write failure aborts the hook with the filesystem error; the
    /// session must not proceed silently without progress tracking.
    pub fn session_start(&self, session: &dyn Session) -> Result<LiveResults> {
        self.tracker.initialize(session)
    }

    /// Per-test completion hook: produces the metadata fragment for the
    /// host's report stream. Does not touch the live results document.
    pub fn test_completed(&self, item: &dyn TestNode, call: &CallInfo) -> Map<String, Value> {
        runtest_metadata(item, call)
    }
}
