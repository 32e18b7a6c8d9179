use crate::error::{AdvectionError, Result};

/// Upper bound on `(t_steps + 1) * (x_steps + 1)`; each scheme holds a full grid.
pub const MAX_GRID_POINTS: f64 = 1.0e7;

/// Discretization and physical constants of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Advection speed `A`.
    pub speed: f64,
    pub x_min: f64,
    pub x_max: f64,
    /// Number of spatial steps; the grid has `x_steps + 1` points.
    pub x_steps: usize,
    pub dt: f64,
    pub t_end: f64,
    /// Times at which norms are printed and rows are exported.
    pub checkpoints: Vec<f64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            speed: 1.0,
            x_min: -40.0,
            x_max: 40.0,
            x_steps: 100,
            dt: 0.1,
            t_end: 20.0,
            checkpoints: vec![5.0, 10.0, 20.0],
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() {
            return Err(AdvectionError::InvalidConfig(format!(
                "speed must be finite, got {}",
                self.speed
            )));
        }
        if !(self.x_max > self.x_min) {
            return Err(AdvectionError::InvalidConfig(format!(
                "empty domain [{}, {}]",
                self.x_min, self.x_max
            )));
        }
        if self.x_steps < 2 {
            return Err(AdvectionError::InvalidConfig(format!(
                "need at least 2 spatial steps, got {}",
                self.x_steps
            )));
        }
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(AdvectionError::InvalidConfig(format!(
                "time step must be positive, got {}",
                self.dt
            )));
        }
        if !(self.t_end > 0.0) || !self.t_end.is_finite() {
            return Err(AdvectionError::InvalidConfig(format!(
                "end time must be positive, got {}",
                self.t_end
            )));
        }
        let points = ((self.t_end / self.dt).round() + 1.0) * (self.x_steps as f64 + 1.0);
        if points > MAX_GRID_POINTS {
            return Err(AdvectionError::InvalidConfig(format!(
                "grid of {:e} points exceeds the limit of {:e}",
                points, MAX_GRID_POINTS
            )));
        }
        if self.t_steps() < 1 {
            return Err(AdvectionError::InvalidConfig(format!(
                "end time {} is shorter than one time step {}",
                self.t_end, self.dt
            )));
        }
        Ok(())
    }

    pub fn dx(&self) -> f64 {
        (self.x_max - self.x_min) / self.x_steps as f64
    }

    /// Number of time steps; the grid has `t_steps + 1` rows.
    pub fn t_steps(&self) -> usize {
        (self.t_end / self.dt).round() as usize
    }

    /// Courant number `A·Δt/Δx`.
    pub fn cfl(&self) -> f64 {
        self.speed * self.dt / self.dx()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.t_steps() + 1, self.x_steps + 1)
    }

    /// Row holding time `t`, if the grid carries that time level.
    pub fn row_for_time(&self, t: f64) -> Option<usize> {
        if t < 0.0 {
            return None;
        }
        let n = (t / self.dt).round();
        if (n * self.dt - t).abs() >= 0.5 * self.dt {
            return None;
        }
        let n = n as usize;
        (n <= self.t_steps()).then_some(n)
    }

    /// Checkpoint rows present on the grid, paired with their nominal times.
    pub fn checkpoint_rows(&self) -> Vec<(f64, usize)> {
        self.checkpoints
            .iter()
            .filter_map(|&t| self.row_for_time(t).map(|n| (t, n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_reference_discretization() {
        let cfg = GridConfig::default();
        cfg.validate().unwrap();

        assert_relative_eq!(cfg.dx(), 0.8, epsilon = 1e-12);
        assert_eq!(cfg.t_steps(), 200);
        assert_eq!(cfg.shape(), (201, 101));
        assert_relative_eq!(cfg.cfl(), 0.125, epsilon = 1e-12);
    }

    #[test]
    fn checkpoints_map_to_rows() {
        let cfg = GridConfig::default();
        assert_eq!(
            cfg.checkpoint_rows(),
            vec![(5.0, 50), (10.0, 100), (20.0, 200)]
        );
    }

    #[test]
    fn checkpoints_beyond_end_are_skipped() {
        let cfg = GridConfig {
            t_end: 12.0,
            ..GridConfig::default()
        };
        assert_eq!(cfg.checkpoint_rows(), vec![(5.0, 50), (10.0, 100)]);
        assert_eq!(cfg.row_for_time(-1.0), None);
    }

    #[test]
    fn rejects_oversized_grids() {
        let tiny_dt = GridConfig {
            dt: 1e-12,
            ..GridConfig::default()
        };
        let wide = GridConfig {
            x_steps: 100_000,
            ..GridConfig::default()
        };
        for cfg in [tiny_dt, wide] {
            assert!(matches!(
                cfg.validate(),
                Err(AdvectionError::InvalidConfig(msg)) if msg.contains("exceeds")
            ));
        }

        let fine = GridConfig {
            x_steps: 1000,
            dt: 0.01,
            ..GridConfig::default()
        };
        fine.validate().unwrap();
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            GridConfig {
                x_steps: 1,
                ..GridConfig::default()
            },
            GridConfig {
                dt: 0.0,
                ..GridConfig::default()
            },
            GridConfig {
                x_min: 1.0,
                x_max: 1.0,
                ..GridConfig::default()
            },
            GridConfig {
                t_end: 0.01,
                ..GridConfig::default()
            },
            GridConfig {
                speed: f64::NAN,
                ..GridConfig::default()
            },
        ];
        for cfg in bad {
            assert!(matches!(
                cfg.validate(),
                Err(AdvectionError::InvalidConfig(_))
            ));
        }
    }
}
