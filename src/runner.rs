use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ferrowalk_core::prelude::*;
use rayon::ThreadPool;
use tracing::{error, info, warn};

use crate::AppError;
use crate::cli::{Args, Case};
use crate::config::Settings;
use crate::report::{write_results, write_timings};

/// What a finished case produced
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub queries: usize,
    pub unreachable: usize,
    pub compute: Duration,
    pub total: Duration,
    pub geojson: Option<PathBuf>,
}

/// Runs every case named on the command line.
///
/// A failing case is logged and the remaining cases still run; the error
/// reports how many failed.
pub fn run(args: &Args) -> Result<(), AppError> {
    let settings = Settings::from_args(args)?;
    let cases = args.cases()?;

    let pool = match settings.threads {
        Some(threads) => Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?,
        ),
        None => None,
    };

    let mut failed = 0;
    for (index, case) in cases.iter().enumerate() {
        info!(
            "Processing case {}/{}: {}, {} in {}",
            index + 1,
            cases.len(),
            file_name(&case.map),
            file_name(&case.queries),
            file_name(&case.output)
        );

        match run_case(case, &settings, pool.as_ref()) {
            Ok(summary) => info!(
                "Solved {} queries ({} unreachable) in {} ms, {} ms total",
                summary.queries,
                summary.unreachable,
                summary.compute.as_millis(),
                summary.total.as_millis()
            ),
            Err(e) => {
                error!("Case {} failed: {e}", index + 1);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        Err(AppError::CasesFailed(failed))
    } else {
        Ok(())
    }
}

/// Loads one case, solves all of its queries and writes the report
pub fn run_case(
    case: &Case,
    settings: &Settings,
    pool: Option<&ThreadPool>,
) -> Result<CaseSummary, AppError> {
    let total_timer = Instant::now();

    let scenario = load_scenario(&ScenarioConfig::new(&case.map, &case.queries))?;
    let Scenario { network, queries } = &scenario;

    let compute_timer = Instant::now();
    let results = match pool {
        Some(pool) => pool.install(|| solve_batch(network, queries, &settings.options)),
        None => solve_batch(network, queries, &settings.options),
    };
    let compute = compute_timer.elapsed();

    let file = File::create(&case.output).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to create file '{}': {}", case.output.display(), e),
        )
    })?;
    let mut writer = BufWriter::new(file);
    write_results(&mut writer, &results)?;
    let total = total_timer.elapsed();
    write_timings(&mut writer, compute, total)?;
    writer.flush()?;

    let geojson = if settings.geojson {
        render_first_route(case, settings, &scenario, &results)
    } else {
        None
    };

    Ok(CaseSummary {
        queries: results.len(),
        unreachable: results.iter().filter(|r| !r.is_reachable()).count(),
        compute,
        total,
        geojson,
    })
}

/// Writes the first query's route as GeoJSON; rendering problems are not fatal
fn render_first_route(
    case: &Case,
    settings: &Settings,
    scenario: &Scenario,
    results: &[RouteResult],
) -> Option<PathBuf> {
    let (query, result) = scenario.queries.first().zip(results.first())?;
    let path = geojson_path(&case.output);

    let rendered = DetailedRoute::from_result(&scenario.network, query, result, &settings.options)
        .and_then(|route| route.to_geojson_string(&scenario.network, settings.with_network))
        .map_err(AppError::from)
        .and_then(|json| std::fs::write(&path, json).map_err(AppError::from));

    match rendered {
        Ok(()) => {
            info!("Route saved to: {}", path.display());
            Some(path)
        }
        Err(e) => {
            warn!("Route rendering failed: {e}");
            None
        }
    }
}

/// `<dir>/<output stem>_route.geojson`
pub fn geojson_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{stem}_route.geojson"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
