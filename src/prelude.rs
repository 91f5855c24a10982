//! Convenience re-exports of the names a host integration touches.

pub use crate::errors::{PulseError, Result};
pub use crate::hooks::{runtest_metadata, CallInfo, PulsePlugin, Session, TestNode, CREATED_WITH_KEY};
pub use crate::live::{LiveResults, LiveResultsTracker, Outcome, TestRecord};
pub use crate::marker::{resolve_marker, Marker, MARKER_NONE};
pub use crate::params::{format_parametrize_id, ParamValue};
