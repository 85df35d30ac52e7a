//! Consolidated validation utilities

pub mod numeric;

pub use numeric::NumericValidator;
