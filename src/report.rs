//! Error norms and CSV snapshots of computed solutions.

use std::fs::{self, File};
use std::path::Path;

use csv::WriterBuilder;
use log::debug;
use serde::Serialize;

use crate::error::{AdvectionError, Result};
use crate::fd_core::{config::GridConfig, grid::Grid, mesh::Mesh, norm::NormTriple};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointNorm {
    pub t: f64,
    pub row: usize,
    pub norms: NormTriple,
}

#[derive(Serialize)]
struct NormRow<'a> {
    scheme: &'a str,
    t: f64,
    one_norm: f64,
    two_norm: f64,
    uniform_norm: f64,
}

/// Elementwise `computed - exact`.
pub fn compute_errors(computed: &Grid, exact: &Grid) -> Result<Grid> {
    computed.difference(exact)
}

/// Norms of the error rows at every checkpoint the grid carries, divided by
/// the number of spatial steps.
pub fn checkpoint_norms(error: &Grid, cfg: &GridConfig) -> Result<Vec<CheckpointNorm>> {
    if error.shape() != cfg.shape() {
        return Err(AdvectionError::shape("error grid", cfg.shape(), error.shape()));
    }
    let scale = cfg.x_steps as f64;
    Ok(cfg
        .checkpoint_rows()
        .into_iter()
        .map(|(t, row)| CheckpointNorm {
            t,
            row,
            norms: NormTriple::scaled(&error.row(row), scale),
        })
        .collect())
}

pub fn render_norms(scheme_name: &str, norms: &[CheckpointNorm]) -> String {
    let mut out = format!("{}\n", scheme_name);
    for c in norms {
        out.push_str(&format!(
            "1st norm at {t}: {}\n2nd norm at {t}: {}\nuniform norm at {t}: {}\n\n",
            c.norms.one,
            c.norms.two,
            c.norms.uniform,
            t = c.t
        ));
    }
    out
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| AdvectionError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| AdvectionError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the x-coordinates, then the grid rows at the checkpoint times.
/// Every line ends with a trailing comma. Returns the number of data rows.
pub fn write_snapshot_csv(
    path: &Path,
    grid: &Grid,
    mesh: &dyn Mesh,
    cfg: &GridConfig,
) -> Result<usize> {
    let x = mesh.x_values();
    if x.len() != grid.cols() {
        return Err(AdvectionError::length("snapshot columns", x.len(), grid.cols()));
    }
    if mesh.t_values().len() != grid.rows() {
        return Err(AdvectionError::length(
            "snapshot rows",
            mesh.t_values().len(),
            grid.rows(),
        ));
    }

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(create_file(path)?);

    wtr.write_record(x.iter().map(|v| v.to_string()).chain(Some(String::new())))?;

    let mut written = 0;
    for (_, n) in cfg.checkpoint_rows() {
        let row = grid.row(n);
        wtr.write_record(row.iter().map(|v| v.to_string()).chain(Some(String::new())))?;
        written += 1;
    }
    wtr.flush().map_err(|source| AdvectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} rows to {}", written, path.display());

    Ok(written)
}

/// One serialized row per scheme and checkpoint.
pub fn write_norm_summary(path: &Path, results: &[(&str, Vec<CheckpointNorm>)]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(create_file(path)?);
    for (scheme, norms) in results {
        for c in norms {
            wtr.serialize(NormRow {
                scheme: *scheme,
                t: c.t,
                one_norm: c.norms.one,
                two_norm: c.norms.two,
                uniform_norm: c.norms.uniform,
            })?;
        }
    }
    wtr.flush().map_err(|source| AdvectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
