//! Service layer for input reading and report rendering

pub mod format;
pub mod io;

pub use format::ReportFormatter;
pub use io::{BatchReadOutcome, ColorIOService};
