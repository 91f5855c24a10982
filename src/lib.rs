//! # Testpulse
//!
//! Marker tagging and live progress reporting for test harness runs.
//!
//! Testpulse augments an external test-running host with three cooperating
//! pieces, all invoked as synchronous hook callbacks:
//!
//! 1. **Marker resolution**: each test's ordered tags are scanned against a
//!    fixed marker vocabulary and the first recognized label (or the `"MN"`
//!    sentinel) is attached to its result metadata under `created_with`.
//! 2. **Parametrize ID formatting**: parameter values render as stable
//!    `|name = value|` fragments inside generated test identifiers.
//! 3. **Live results**: a JSON document enumerating every selected test is
//!    written at session start, pre-populated with the expected outcome, and
//!    mutated in place as outcomes become known.
//!
//! The host's session and item objects are consumed through the narrow
//! capability traits in [`hooks`]; no concrete host type is required.

pub mod errors;
pub mod hooks;
pub mod live;
pub mod marker;
pub mod params;
pub mod prelude;

pub use crate::errors::{PulseError, Result};
pub use crate::hooks::{CallInfo, PulsePlugin, Session, TestNode};
pub use crate::live::{LiveResults, LiveResultsTracker, Outcome, TestRecord};
pub use crate::marker::{resolve_marker, Marker, MARKER_NONE};
pub use crate::params::{format_parametrize_id, ParamValue};
