use crate::fd_core::{config::GridConfig, grid::Vector};

pub trait Mesh {
    fn get_dx(&self) -> f64;

    fn get_dt(&self) -> f64;

    fn get_point(&self, i: usize) -> f64;

    fn get_time(&self, n: usize) -> f64;

    fn x_values(&self) -> &Vector;

    fn t_values(&self) -> &Vector;
}

/// Node coordinates of a uniform space-time grid.
pub struct Mesh1d {
    dx: f64,
    dt: f64,
    x_values: Vector,
    t_values: Vector,
}

impl Mesh1d {
    pub fn new(x_start: f64, num_steps: usize, dx: f64, num_levels: usize, dt: f64) -> Self {
        let x_values = Vector::from_fn(num_steps + 1, |i, _| x_start + i as f64 * dx);
        let t_values = Vector::from_fn(num_levels + 1, |n, _| n as f64 * dt);
        Mesh1d {
            dx,
            dt,
            x_values,
            t_values,
        }
    }

    pub fn from_config(cfg: &GridConfig) -> Self {
        Mesh1d::new(cfg.x_min, cfg.x_steps, cfg.dx(), cfg.t_steps(), cfg.dt)
    }
}

impl Mesh for Mesh1d {
    fn get_dx(&self) -> f64 {
        self.dx
    }

    fn get_dt(&self) -> f64 {
        self.dt
    }

    fn get_point(&self, i: usize) -> f64 {
        self.x_values[i]
    }

    fn get_time(&self, n: usize) -> f64 {
        self.t_values[n]
    }

    fn x_values(&self) -> &Vector {
        &self.x_values
    }

    fn t_values(&self) -> &Vector {
        &self.t_values
    }
}
