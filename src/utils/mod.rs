//! Utility modules for common operations
//!
//! Parsing and numeric checks shared by the batch reader and the
//! blending processor.

pub mod color;
pub mod validation;

// Re-export commonly used items for convenience
pub use color::{ColorFormat, ColorParser};
pub use validation::NumericValidator;
