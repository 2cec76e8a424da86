//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`fixed_end_moment`] - Fixed-fixed beam, single point load

pub mod fixed_end_moment;

// Re-export commonly used types
pub use fixed_end_moment::{
    calculate, compute, BeamSpan, FixedEndMomentInput, FixedEndMomentResult, FixedEndMoments,
    PointLoad,
};
