// src/main.rs

use std::process;
use log::{info, debug, error};
use env_logger::Env;
use serde::Serialize;
use euler::config::EulerConfig;
use euler::core::{EulerError, Result};
use euler::graph::GridGraph;
use euler::graph::loader::load_matrix_from_path;

#[derive(Debug, Serialize)]
struct PathReport {
    matrix: String,
    rows: usize,
    columns: usize,
    right_down: i64,
    four_way: i64,
}

fn run(config: &EulerConfig) -> Result<PathReport> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| config.matrix_path.clone())
        .ok_or_else(|| EulerError::invalid_argument("usage: euler <matrix file>"))?;

    info!("Loading matrix from {}", path);
    let matrix = load_matrix_from_path(&path)?;
    let rows = matrix.len();
    let columns = matrix.first().map_or(0, |row| row.len());
    debug!("Matrix has {} rows and {} columns", rows, columns);

    let right_down = GridGraph::right_down(&matrix)?.minimal_path_sum()?;
    let four_way = GridGraph::four_way(&matrix)?.minimal_path_sum()?;

    Ok(PathReport {
        matrix: path,
        rows,
        columns,
        right_down,
        four_way,
    })
}

fn main() {
    let config_result = EulerConfig::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    // Initialize the logger
    let env = Env::default()
        .filter_or("EULER_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("EULER_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Err(err) = &config_result {
        error!("Failed to load configuration, using defaults: {}", err);
    }

    let output = run(&config).and_then(|report| Ok(serde_json::to_string_pretty(&report)?));
    match output {
        Ok(json) => println!("{}", json),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
