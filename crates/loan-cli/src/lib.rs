//! Library side of the `loan-features` binary.

pub mod logging;
pub mod pipeline;
