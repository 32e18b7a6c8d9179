//! Explicit update rules for `f_t + c f_x = 0`.
//!
//! Every function expects row 0 and both boundary columns to be seeded and
//! fills the interior points `1..cols-1` of every later row. `cfl` is the
//! Courant number `c·Δt/Δx`.

use crate::fd_core::grid::Grid;

/// First order, backward difference in space.
pub fn upwind_scheme(f: &mut Grid, cfl: f64) {
    let (rows, cols) = f.shape();
    for n in 1..rows {
        for i in 1..cols - 1 {
            f[(n, i)] = f[(n - 1, i)] - cfl * (f[(n - 1, i)] - f[(n - 1, i - 1)]);
        }
    }
}

/// Forward in time, centred in space.
pub fn central_difference_scheme(f: &mut Grid, cfl: f64) {
    let (rows, cols) = f.shape();
    for n in 0..rows - 1 {
        for i in 1..cols - 1 {
            f[(n + 1, i)] = f[(n, i)] - 0.5 * cfl * (f[(n, i + 1)] - f[(n, i - 1)]);
        }
    }
}

/// Central flux applied to the neighbour average.
pub fn lax_scheme(f: &mut Grid, cfl: f64) {
    let (rows, cols) = f.shape();
    for n in 0..rows - 1 {
        for i in 1..cols - 1 {
            f[(n + 1, i)] = 0.5 * (f[(n, i + 1)] + f[(n, i - 1)])
                - 0.5 * cfl * (f[(n, i + 1)] - f[(n, i - 1)]);
        }
    }
}

/// Centred in time and space. Row 1 comes from a single step off row 0
/// with the full Courant factor on the central difference.
pub fn leapfrog_scheme(f: &mut Grid, cfl: f64) {
    let (rows, cols) = f.shape();
    if rows < 2 {
        return;
    }
    for i in 1..cols - 1 {
        f[(1, i)] = f[(0, i)] - cfl * (f[(0, i + 1)] - f[(0, i - 1)]);
    }
    for n in 1..rows - 1 {
        for i in 1..cols - 1 {
            f[(n + 1, i)] = f[(n - 1, i)] - cfl * (f[(n, i + 1)] - f[(n, i - 1)]);
        }
    }
}
