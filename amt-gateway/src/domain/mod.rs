//! Domain types for the AMT gateway.
//!
//! Validated path parameters (stop and line codes) and the records the
//! extractors build from upstream pages. Codes enforce their shape at
//! construction time, so handlers that hold one can fetch without further
//! checks.

mod code;
mod error;
mod line;
mod stop;

pub use code::{LineCode, StopCode};
pub use error::CodeError;
pub use line::{DirectionSchedule, LineRecord};
pub use stop::{ArrivalEntry, StopRecord};
