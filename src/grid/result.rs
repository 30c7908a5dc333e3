//! Grid scan output

use ndarray::Array2;

/// Lyapunov exponents over an initial-angle grid
///
/// `exponents[(i, j)]` is the exponent for `θ1 = theta1[i]`, `θ2 = theta2[j]`.
/// Cells whose estimate is NaN or infinite are kept as such.
#[derive(Debug, Clone, PartialEq)]
pub struct GridResult {
    /// Row axis, initial θ1 [rad]
    pub theta1: Vec<f64>,

    /// Column axis, initial θ2 [rad]
    pub theta2: Vec<f64>,

    /// `n_theta × n_theta` exponent matrix
    pub exponents: Array2<f64>,
}

impl GridResult {
    /// Color-scale bounds for heatmap rendering
    ///
    /// Values outside (and non-finite cells) are drawn as out of range.
    pub const COLOR_SCALE: (f64, f64) = (0.0, 1.0);

    /// Grid resolution along each axis
    pub fn n_theta(&self) -> usize {
        self.theta1.len()
    }

    /// Exponent at row `i`, column `j`
    pub fn exponent(&self, i: usize, j: usize) -> Option<f64> {
        self.exponents.get((i, j)).copied()
    }

    /// Number of NaN/Inf cells
    pub fn degenerate_cells(&self) -> usize {
        self.exponents.iter().filter(|value| !value.is_finite()).count()
    }

    /// Smallest and largest finite exponent, `None` if no cell is finite
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.exponents
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((low, high)) => Some((low.min(value), high.max(value))),
            })
    }

    /// `(θ1, θ2, λ)` for every cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.exponents
            .indexed_iter()
            .map(|((i, j), &value)| (self.theta1[i], self.theta2[j], value))
    }
}
