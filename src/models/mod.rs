//! Domain models for both simulators.
//!
//! Provides the data types consumed and produced by the Banker's
//! safe-state analyzer and the CPU scheduling engine. All models are
//! plain values with serde derives, constructed once and never mutated
//! by the algorithms that read them.
//!
//! # Domain Mappings
//!
//! | Type | Used by | Meaning |
//! |------|---------|---------|
//! | Process | scheduler | CPU job with arrival, burst, priority |
//! | ScheduleBlock | scheduler | `[start, end)` CPU interval |
//! | ScheduleResult | scheduler | Timeline + per-process metrics |
//! | ResourceState | banker | Available vector + process claims |
//! | SafeSequence | banker | Completion order + synthetic timing |

mod process;
mod resource;
mod safe_sequence;
mod schedule;

pub use process::Process;
pub(crate) use resource::fits_within;
pub use resource::{ProcessClaim, ResourceState};
pub use safe_sequence::{SafeSequence, SequenceStep};
pub use schedule::{ProcessDetail, ScheduleBlock, ScheduleResult};
