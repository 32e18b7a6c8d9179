pub mod stencil;

use std::fmt;

use crate::fd_core::{config::GridConfig, grid::Grid};

use stencil::{central_difference_scheme, lax_scheme, leapfrog_scheme, upwind_scheme};

/// The explicit finite-difference schemes under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Upwind,
    CentralDifference,
    Lax,
    Leapfrog,
}

/// A seeded grid plus the discretization it lives on.
pub struct Problem<'a> {
    pub config: &'a GridConfig,
    pub seeded: &'a Grid,
}

pub struct Solution {
    pub name: &'static str,
    pub grid: Grid,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [
        Scheme::Upwind,
        Scheme::CentralDifference,
        Scheme::Lax,
        Scheme::Leapfrog,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Upwind => "Upwind scheme",
            Scheme::CentralDifference => "Central Difference scheme",
            Scheme::Lax => "Lax scheme",
            Scheme::Leapfrog => "Leapfrog scheme",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Scheme::Upwind => "upwind",
            Scheme::CentralDifference => "centraldifference",
            Scheme::Lax => "lax",
            Scheme::Leapfrog => "leapfrog",
        }
    }

    /// Fills the interior of `f` in place.
    pub fn apply(&self, f: &mut Grid, cfl: f64) {
        match self {
            Scheme::Upwind => upwind_scheme(f, cfl),
            Scheme::CentralDifference => central_difference_scheme(f, cfl),
            Scheme::Lax => lax_scheme(f, cfl),
            Scheme::Leapfrog => leapfrog_scheme(f, cfl),
        }
    }

    pub fn compute_solution(&self, problem: &Problem) -> Solution {
        let mut grid = problem.seeded.clone();
        self.apply(&mut grid, problem.config.cfl());
        Solution {
            name: self.name(),
            grid,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
