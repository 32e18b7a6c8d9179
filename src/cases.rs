use std::fmt;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::error::Result;
use crate::fd_core::{
    analytical::{AnalyticalSolution, TravellingWave},
    condition::{initialize_grid, BCEnforcer, DirichletBC, InitialCondition},
    config::GridConfig,
    initial::{gauss_pulse, gauss_standard, step_standard, unit_step},
    mesh::{Mesh, Mesh1d},
};
use crate::report::{
    checkpoint_norms, compute_errors, ensure_dir, render_norms, write_norm_summary,
    write_snapshot_csv, CheckpointNorm,
};
use crate::schemes::{Problem, Scheme};

/// Initial-value problems with a known exact solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Unit step at the origin, `f = 0` on the left boundary and `1` on the right.
    Step,
    /// Gaussian pulse at the origin, zero on both boundaries.
    Gaussian,
}

pub struct CaseReport {
    pub case: Case,
    pub norms: Vec<(Scheme, Vec<CheckpointNorm>)>,
    /// Number of data rows in each snapshot file.
    pub snapshot_rows: usize,
}

impl Case {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Case::Step => "1stcase",
            Case::Gaussian => "2ndcase",
        }
    }

    fn profile(&self) -> fn(f64) -> f64 {
        match self {
            Case::Step => unit_step,
            Case::Gaussian => gauss_pulse,
        }
    }

    fn initial(&self) -> Box<dyn InitialCondition> {
        match self {
            Case::Step => Box::new(step_standard()),
            Case::Gaussian => Box::new(gauss_standard()),
        }
    }

    fn boundary(&self) -> Box<dyn BCEnforcer> {
        match self {
            Case::Step => Box::new(DirichletBC {
                left: 0.0,
                right: 1.0,
            }),
            Case::Gaussian => Box::new(DirichletBC {
                left: 0.0,
                right: 0.0,
            }),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Step => f.write_str("step"),
            Case::Gaussian => f.write_str("gaussian"),
        }
    }
}

fn progress_bar(len: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░"),
    );
    pb
}

/// Runs every scheme on `case`, prints the norm report and writes the
/// snapshots under `out_dir/<case dir>/`.
pub fn solve_case(case: Case, cfg: &GridConfig, out_dir: &Path, show_progress: bool) -> Result<CaseReport> {
    cfg.validate()?;
    info!(
        "{} case: {}x{} grid, dx = {}, dt = {}, cfl = {}",
        case,
        cfg.shape().0,
        cfg.shape().1,
        cfg.dx(),
        cfg.dt,
        cfg.cfl()
    );
    let skipped = cfg.checkpoints.len() - cfg.checkpoint_rows().len();
    if skipped > 0 {
        warn!("{} checkpoint(s) fall outside the time grid and are skipped", skipped);
    }

    let mesh = Mesh1d::from_config(cfg);
    let seeded = initialize_grid(&mesh, case.initial().as_ref(), case.boundary().as_ref());
    let problem = Problem {
        config: cfg,
        seeded: &seeded,
    };

    let pb = progress_bar(Scheme::ALL.len() as u64, show_progress);
    let mut solutions = Vec::with_capacity(Scheme::ALL.len());
    for scheme in Scheme::ALL {
        pb.set_message(scheme.file_stem());
        solutions.push((scheme, scheme.compute_solution(&problem)));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let exact = TravellingWave {
        profile: case.profile(),
        c: cfg.speed,
    }
    .compute(&mesh);

    println!();
    println!("DELTAX = {}", mesh.get_dx());
    println!("DELTAT = {}", mesh.get_dt());
    println!();

    let mut norms = Vec::with_capacity(solutions.len());
    for (scheme, solution) in &solutions {
        let error = compute_errors(&solution.grid, &exact)?;
        let checkpoints = checkpoint_norms(&error, cfg)?;
        print!("{}", render_norms(solution.name, &checkpoints));
        norms.push((*scheme, checkpoints));
    }

    let case_dir = out_dir.join(case.dir_name());
    ensure_dir(&case_dir)?;
    let snapshot_rows = write_snapshot_csv(&case_dir.join("analytical.csv"), &exact, &mesh, cfg)?;
    for (scheme, solution) in &solutions {
        let path = case_dir.join(format!("{}.csv", scheme.file_stem()));
        write_snapshot_csv(&path, &solution.grid, &mesh, cfg)?;
    }

    let summary: Vec<(&str, Vec<CheckpointNorm>)> = norms
        .iter()
        .map(|(scheme, c)| (scheme.file_stem(), c.clone()))
        .collect();
    write_norm_summary(&case_dir.join("norms.csv"), &summary)?;
    info!("snapshots written to {}", case_dir.display());

    Ok(CaseReport {
        case,
        norms,
        snapshot_rows,
    })
}
