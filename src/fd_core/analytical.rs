use crate::fd_core::{grid::Grid, mesh::Mesh};

pub trait AnalyticalSolution {
    fn evaluate(&self, x: f64, t: f64) -> f64;

    fn compute(&self, mesh: &dyn Mesh) -> Grid {
        Grid::from_fn(mesh.t_values().len(), mesh.x_values().len(), |n, i| {
            self.evaluate(mesh.get_point(i), mesh.get_time(n))
        })
    }
}

/// Exact solution of linear advection: the initial profile carried at
/// constant speed, `f(t, x) = f0(x - c t)`.
pub struct TravellingWave<F>
where
    F: Fn(f64) -> f64,
{
    pub profile: F,
    pub c: f64,
}

impl<F> AnalyticalSolution for TravellingWave<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64, t: f64) -> f64 {
        (self.profile)(x - self.c * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fd_core::{config::GridConfig, initial::unit_step, mesh::Mesh1d};

    #[test]
    fn step_front_moves_with_unit_speed() {
        let wave = TravellingWave {
            profile: unit_step,
            c: 1.0,
        };
        assert_eq!(wave.evaluate(4.0, 5.0), 0.0);
        assert_eq!(wave.evaluate(5.0, 5.0), 0.5);
        assert_eq!(wave.evaluate(6.0, 5.0), 1.0);
    }

    #[test]
    fn initial_row_matches_profile() {
        let mesh = Mesh1d::from_config(&GridConfig::default());
        let wave = TravellingWave {
            profile: unit_step,
            c: 1.0,
        };
        let grid = wave.compute(&mesh);

        assert_eq!(grid.shape(), (201, 101));
        for i in 0..grid.cols() {
            assert_eq!(grid[(0, i)], unit_step(mesh.get_point(i)));
        }
    }
}
