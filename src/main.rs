pub mod cases;
pub mod error;
pub mod fd_core;
pub mod report;
pub mod schemes;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use cases::{solve_case, Case};
use fd_core::config::GridConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CaseArg {
    Step,
    Gaussian,
    All,
}

/// Solve the 1D linear advection equation with four explicit schemes and
/// compare them against the exact solution.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value = "step")]
    case: CaseArg,

    /// Root directory for the CSV snapshots.
    #[arg(short, long, default_value = "matrices")]
    output: PathBuf,

    #[arg(long)]
    x_steps: Option<usize>,

    #[arg(long)]
    dt: Option<f64>,

    #[arg(long)]
    t_end: Option<f64>,

    /// Advection speed.
    #[arg(long)]
    speed: Option<f64>,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn grid_config(&self) -> GridConfig {
        let mut cfg = GridConfig::default();
        if let Some(x_steps) = self.x_steps {
            cfg.x_steps = x_steps;
        }
        if let Some(dt) = self.dt {
            cfg.dt = dt;
        }
        if let Some(t_end) = self.t_end {
            cfg.t_end = t_end;
        }
        if let Some(speed) = self.speed {
            cfg.speed = speed;
        }
        cfg
    }

    fn cases(&self) -> Vec<Case> {
        match self.case {
            CaseArg::Step => vec![Case::Step],
            CaseArg::Gaussian => vec![Case::Gaussian],
            CaseArg::All => vec![Case::Step, Case::Gaussian],
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    SimpleLogger::new().with_level(cli.log_level).init()?;

    let cfg = cli.grid_config();
    cfg.validate()?;

    for case in cli.cases() {
        let report = solve_case(case, &cfg, &cli.output, !cli.no_progress)?;
        log::info!("{} case done, {} rows per snapshot", report.case, report.snapshot_rows);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_run_the_step_case_with_defaults() {
        let cli = Cli::parse_from(["fd_advection"]);

        assert_eq!(cli.cases(), vec![Case::Step]);
        assert_eq!(cli.grid_config(), GridConfig::default());
        assert_eq!(cli.output, PathBuf::from("matrices"));
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn overrides_reach_the_config() {
        let cli = Cli::parse_from([
            "fd_advection",
            "--case",
            "all",
            "--x-steps",
            "80",
            "--dt",
            "0.05",
            "--no-progress",
        ]);

        assert_eq!(cli.cases(), vec![Case::Step, Case::Gaussian]);
        let cfg = cli.grid_config();
        assert_eq!(cfg.x_steps, 80);
        assert_eq!(cfg.dt, 0.05);
        assert_eq!(cfg.t_steps(), 400);
        assert!(cli.no_progress);
    }
}
