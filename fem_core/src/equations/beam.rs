//! # Fixed-Fixed Beam Formulas
//!
//! Closed-form fixed-end moments for a beam rigidly restrained at both ends
//! (A at x=0, B at x=L). These are raw formulas: they do not validate their
//! arguments. Use [`crate::calculations::fixed_end_moment::compute`] for the
//! checked entry point.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `a` = Load position from support A
//! - `b` = L - a, load position from support B
//! - `P` = Point load magnitude
//! - `M_A`, `M_B` = Fixed-end moments at A and B
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Fixed-end moments: Negative = hogging (tension on top fiber)
//!
//! ## References
//!
//! - Structural Analysis by R.C. Hibbeler, moment distribution FEM table
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

/// Fixed-end moments for point load P at distance a from support A
///
/// ```text
///           P
///           ↓
///  ▌────────┬──────────────▐
///  ▌   a    │      b       ▐
///  A ←──────── L ─────────→ B
/// ```
///
/// # Formulas
/// - M_A = -P·a·b² / L²
/// - M_B = -P·a²·b / L²
///
/// # Arguments
/// * `p` - Point load magnitude (positive downward)
/// * `a` - Distance from support A to load
/// * `l` - Span length
///
/// # Returns
/// (M_A, M_B) - hogging moments are negative
#[inline]
pub fn fem_point_load(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    // Ratios first: L² under/overflows long before the moments do
    let (ra, rb) = (a / l, b / l);
    let m_a = -p * a * rb * rb;
    let m_b = -p * ra * ra * b;
    (m_a, m_b)
}

/// Textbook check value for a point load at midspan
///
/// # Formula
/// M_A = M_B = -PL/8
///
/// [`fem_point_load`] already produces this at a = L/2; this is only the
/// independent value it is compared against.
#[inline]
pub fn fem_point_load_midspan(p: f64, l: f64) -> f64 {
    -p * l / 8.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midspan_matches_pl_over_8() {
        // 6 m span, 10 kN at midspan: -10 * 6 / 8 = -7.5
        let (m_a, m_b) = fem_point_load(10.0, 3.0, 6.0);
        assert_relative_eq!(m_a, -7.5, epsilon = 1e-12);
        assert_relative_eq!(m_b, -7.5, epsilon = 1e-12);
        assert_relative_eq!(fem_point_load_midspan(10.0, 6.0), -7.5);
    }

    #[test]
    fn test_third_point_load() {
        // a = 2, b = 4: M_A = -10*2*16/36, M_B = -10*4*4/36
        let (m_a, m_b) = fem_point_load(10.0, 2.0, 6.0);
        assert_relative_eq!(m_a, -320.0 / 36.0, epsilon = 1e-12);
        assert_relative_eq!(m_b, -160.0 / 36.0, epsilon = 1e-12);
    }

    #[test]
    fn test_near_support_gets_larger_moment() {
        // Load closer to A hogs A harder
        let (m_a, m_b) = fem_point_load(1000.0, 2.5, 10.0);
        assert!(m_a < m_b, "M_A = {}, M_B = {}", m_a, m_b);
    }

    #[test]
    fn test_extreme_spans_stay_finite() {
        // L² alone would underflow to 0 or overflow to inf here
        for l in [1e-200, 1e200] {
            let (m_a, m_b) = fem_point_load(10.0, l / 2.0, l);
            assert_relative_eq!(m_a, -10.0 * l / 8.0, max_relative = 1e-12);
            assert_relative_eq!(m_b, -10.0 * l / 8.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_superposition_of_mirrored_loads() {
        // Two equal loads at a and L-a give equal end moments
        let l = 10.0;
        let (a1, b1) = fem_point_load(500.0, 3.0, l);
        let (a2, b2) = fem_point_load(500.0, 7.0, l);
        assert_relative_eq!(a1 + a2, b1 + b2, epsilon = 1e-9);
    }
}
