use crate::fd_core::{
    grid::{Grid, Vector},
    mesh::Mesh,
};

//traits
pub trait InitialCondition {
    fn compute(&self, mesh: &dyn Mesh) -> Vector;
}

pub trait BCEnforcer {
    fn enforce(&self, grid: &mut Grid);
}

//structs for initial
pub struct StandardInit<F>
where
    F: Fn(f64) -> f64,
{
    pub f: F,
}

//structs for boundary

/// Fixed values in the first and last spatial column at every time level.
pub struct DirichletBC {
    pub left: f64,
    pub right: f64,
}

//implementation for initial
impl<F> InitialCondition for StandardInit<F>
where
    F: Fn(f64) -> f64,
{
    fn compute(&self, mesh: &dyn Mesh) -> Vector {
        mesh.x_values().map(|x| (self.f)(x))
    }
}

//implementation for boundary
impl BCEnforcer for DirichletBC {
    fn enforce(&self, grid: &mut Grid) {
        let last = grid.cols() - 1;
        for n in 0..grid.rows() {
            grid[(n, 0)] = self.left;
            grid[(n, last)] = self.right;
        }
    }
}

/// Seeds row 0 from `init`, then lets `bc` overwrite the boundary columns.
pub fn initialize_grid<I, B>(mesh: &dyn Mesh, init: &I, bc: &B) -> Grid
where
    I: InitialCondition + ?Sized,
    B: BCEnforcer + ?Sized,
{
    let u0 = init.compute(mesh);
    let mut grid = Grid::zeros(mesh.t_values().len(), u0.len());
    for (i, &value) in u0.iter().enumerate() {
        grid[(0, i)] = value;
    }
    bc.enforce(&mut grid);
    grid
}
