//! # Structural Engineering Equations
//!
//! The fixed-end moment formulas and their metadata, kept apart from the
//! validated calculation so each formula can be checked against its
//! reference on its own.
//!
//! ## Modules
//!
//! - [`beam`] - Fixed-fixed beam formulas
//! - [`registry`] - Equation metadata for reports
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Fixed-end moments**: Negative = hogging at the support

pub mod beam;
pub mod registry;

pub use beam::{fem_point_load, fem_point_load_midspan};

pub use registry::{
    CodeReference,
    Equation,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    equations_for,
};
