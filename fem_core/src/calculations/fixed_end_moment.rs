//! # Fixed-End Moments: Point Load
//!
//! Support moments of a fixed-fixed beam carrying one transverse point load.
//!
//! ## Assumptions
//!
//! - Both ends rigidly fixed (no rotation, no translation)
//! - Linear elastic, small-deflection beam theory
//! - Load strictly between the supports (0 < a < L)
//! - Consistent units supplied by the caller (e.g. kN and m give kN·m)
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use fem_core::calculations::fixed_end_moment::{compute, calculate, FixedEndMomentInput};
//!
//! let fem = compute(10.0, 6.0, 2.0).unwrap();
//! assert!((fem.m_a - -8.8889).abs() < 1e-4);
//! assert!((fem.m_b - -4.4444).abs() < 1e-4);
//!
//! let input = FixedEndMomentInput::new("Demo", 10.0, 6.0, 3.0);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.midspan_check, Some(-7.5));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::beam::{fem_point_load, fem_point_load_midspan};
use crate::errors::{CalcError, CalcResult};

/// Tolerance on |a - L/2| for reporting the midspan cross-check
pub const MIDSPAN_TOLERANCE: f64 = 1e-12;

/// Beam span between support A and support B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpan {
    /// Span length L
    pub length: f64,
}

impl BeamSpan {
    /// Create a span, rejecting L <= 0 (and non-finite L).
    pub fn new(length: f64) -> CalcResult<Self> {
        validate_span(length)?;
        Ok(Self { length })
    }

    /// Fixed-end moments for `load` on this span.
    pub fn fixed_end_moments(&self, load: &PointLoad) -> CalcResult<FixedEndMoments> {
        compute(load.magnitude, self.length, load.position)
    }
}

/// Concentrated transverse load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude P (positive downward)
    pub magnitude: f64,
    /// Distance a from support A
    pub position: f64,
}

impl PointLoad {
    pub fn new(magnitude: f64, position: f64) -> Self {
        Self { magnitude, position }
    }
}

/// Moment reactions at the two supports. Negative = hogging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedEndMoments {
    /// Moment at support A (left)
    pub m_a: f64,
    /// Moment at support B (right)
    pub m_b: f64,
}

impl FixedEndMoments {
    /// Same moments seen from the other end of the beam (A and B swapped).
    pub fn mirrored(&self) -> Self {
        Self {
            m_a: self.m_b,
            m_b: self.m_a,
        }
    }
}

impl From<FixedEndMoments> for (f64, f64) {
    fn from(fem: FixedEndMoments) -> Self {
        (fem.m_a, fem.m_b)
    }
}

fn validate_span(span: f64) -> CalcResult<()> {
    // Written as !(L > 0) so NaN is rejected too
    if !(span > 0.0) || !span.is_finite() {
        return Err(CalcError::invalid_span(span));
    }
    Ok(())
}

fn validate_position(position: f64, span: f64) -> CalcResult<()> {
    if !(position > 0.0 && position < span) {
        return Err(CalcError::invalid_load_position(position, span));
    }
    Ok(())
}

/// Compute fixed-end moments for point load `p` at distance `a` on span `l`.
///
/// The span is validated before the load position.
///
/// # Errors
///
/// * `CalcError::InvalidSpan` - `l <= 0`
/// * `CalcError::InvalidLoadPosition` - `a <= 0` or `a >= l`
pub fn compute(p: f64, l: f64, a: f64) -> CalcResult<FixedEndMoments> {
    validate_span(l)?;
    validate_position(a, l)?;

    let (m_a, m_b) = fem_point_load(p, a, l);
    debug!("fem point load: P={} L={} a={} -> M_A={} M_B={}", p, l, a, m_a, m_b);

    Ok(FixedEndMoments { m_a, m_b })
}

/// Input parameters for one fixed-end moment case.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Girder G-2",
///   "load": 10.0,
///   "span": 6.0,
///   "position": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedEndMomentInput {
    /// User label for this case
    #[serde(default)]
    pub label: String,

    /// Point load magnitude P (positive downward)
    pub load: f64,

    /// Span length L
    pub span: f64,

    /// Distance a from support A to the load
    pub position: f64,
}

impl FixedEndMomentInput {
    pub fn new(label: impl Into<String>, load: f64, span: f64, position: f64) -> Self {
        Self {
            label: label.into(),
            load,
            span,
            position,
        }
    }

    /// Load at midspan of `span`.
    pub fn midspan(label: impl Into<String>, load: f64, span: f64) -> Self {
        Self::new(label, load, span, span / 2.0)
    }

    /// Validate input parameters, span first.
    pub fn validate(&self) -> CalcResult<()> {
        validate_span(self.span)?;
        validate_position(self.position, self.span)
    }

    /// True when the load sits at midspan within [`MIDSPAN_TOLERANCE`]
    pub fn is_midspan(&self) -> bool {
        (self.position - self.span / 2.0).abs() < MIDSPAN_TOLERANCE
    }
}

/// Results of a fixed-end moment calculation, with the inputs echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedEndMomentResult {
    pub label: String,
    pub load: f64,
    pub span: f64,
    pub position: f64,

    /// b = L - a
    pub far_distance: f64,

    /// Moment at support A
    pub m_a: f64,

    /// Moment at support B
    pub m_b: f64,

    /// -PL/8, present only when the load is at midspan
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub midspan_check: Option<f64>,
}

impl FixedEndMomentResult {
    pub fn moments(&self) -> FixedEndMoments {
        FixedEndMoments {
            m_a: self.m_a,
            m_b: self.m_b,
        }
    }
}

/// Run the calculation for one input case.
pub fn calculate(input: &FixedEndMomentInput) -> CalcResult<FixedEndMomentResult> {
    let fem = compute(input.load, input.span, input.position)?;

    let midspan_check = input
        .is_midspan()
        .then(|| fem_point_load_midspan(input.load, input.span));

    Ok(FixedEndMomentResult {
        label: input.label.clone(),
        load: input.load,
        span: input.span,
        position: input.position,
        far_distance: input.span - input.position,
        m_a: fem.m_a,
        m_b: fem.m_b,
        midspan_check,
    })
}
