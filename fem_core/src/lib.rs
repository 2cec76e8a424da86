//! # fem_core - Fixed-End Moment Calculation Engine
//!
//! `fem_core` computes the support moments of a fixed-fixed beam under a
//! single point load. All inputs and outputs are JSON-serializable, so the
//! engine can sit behind a CLI, a batch job, or an AI assistant alike.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the violated constraint
//!
//! ## Quick Start
//!
//! ```rust
//! use fem_core::compute;
//!
//! // 10 kN at 2 m on a 6 m span
//! let fem = compute(10.0, 6.0, 2.0).unwrap();
//! println!("M_A = {:.4}, M_B = {:.4}", fem.m_a, fem.m_b);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Validated fixed-end moment calculation
//! - [`equations`] - Raw formulas and equation metadata
//! - [`report`] - Plain-text result rendering
//! - [`settings`] - Report settings
//! - [`units`] - Unit label sets
//! - [`errors`] - Structured error types
//! - [`file_io`] - Case file load/save

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compute, FixedEndMomentInput, FixedEndMomentResult, FixedEndMoments};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_case_file, save_case_file, CaseFile};
pub use settings::ReportSettings;
pub use units::UnitSystem;
