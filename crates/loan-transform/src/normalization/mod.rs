//! Cell-level parse helpers used by the scalar and derived stages.
//!
//! Every helper returns `None` on failure; the caller turns that into a
//! missing cell.

pub mod datetime;
pub mod numeric;

pub use datetime::{months_between, parse_date, period_label};
pub use numeric::{leading_integer, parse_numeric};
