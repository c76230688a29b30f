use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::budget::FaultBudget;
use crate::error::{Result, TerrainError};
use crate::grid::{HeightGrid, HeightSnapshot};
use crate::worker::{FaultWorker, WorkerReport};

// Validated run configuration; fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
    pub width: usize,
    pub height: usize,
    pub workers: usize,
    pub max_fault_lines: usize,
}

impl RunParams {
    // Signed inputs so that zero and negative values can be reported, not just rejected by the parser
    pub fn new(width: i64, height: i64, workers: i64, max_fault_lines: i64) -> Result<Self> {
        let values = [width, height, workers, max_fault_lines];
        if values.iter().any(|&v| v < 1) {
            return Err(TerrainError::InvalidArguments(
                "All argument values must be at least 1".into(),
            ));
        }
        let [width, height, workers, max_fault_lines] = values.map(|v| v as usize);
        Ok(Self {
            width,
            height,
            workers,
            max_fault_lines,
        })
    }

    // Parse exactly four integers: width, height, workers, max fault lines
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() != 4 {
            return Err(TerrainError::InvalidArguments(
                "There must be exactly 4 arguments".into(),
            ));
        }

        let mut values = [0i64; 4];
        for (slot, arg) in values.iter_mut().zip(&args) {
            let arg: &str = arg.as_ref();
            *slot = arg.trim().parse().map_err(|_| {
                TerrainError::InvalidArguments(format!("'{arg}' is not an integer"))
            })?;
        }
        let [width, height, workers, max_fault_lines] = values;
        Self::new(width, height, workers, max_fault_lines)
    }
}

impl fmt::Display for RunParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width = {}, height = {}, number of threads = {}, maximum number of fault lines = {}",
            self.width, self.height, self.workers, self.max_fault_lines
        )
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub snapshot: HeightSnapshot,
    pub lines_applied: usize,
    pub workers: Vec<WorkerReport>,
    // Wall-clock time of the concurrent phase only
    pub elapsed: Duration,
}

// Run the fault-formation engine with entropy-seeded workers
pub fn generate(params: &RunParams) -> Result<RunReport> {
    generate_with(params, |_| ChaCha8Rng::from_entropy())
}

// Same as `generate`, with the random source for each worker supplied by `make_rng(worker_id)`
pub fn generate_with<R, F>(params: &RunParams, mut make_rng: F) -> Result<RunReport>
where
    R: Rng + Send,
    F: FnMut(usize) -> R,
{
    let mut grid = HeightGrid::new(params.height, params.width)?;
    let budget = FaultBudget::new(params.max_fault_lines);
    info!(%params, "starting fault formation");

    let start = Instant::now();
    // The scope is the barrier: every worker is joined before the grid is read
    let results: Vec<Result<WorkerReport>> = thread::scope(|s| {
        let handles: Vec<_> = (0..params.workers)
            .map(|id| {
                let worker = FaultWorker::new(id, &grid, &budget, make_rng(id));
                s.spawn(move || worker.run())
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(id, h)| h.join().unwrap_or(Err(TerrainError::WorkerPanicked(id))))
            .collect()
    });
    let elapsed = start.elapsed();

    let workers = results.into_iter().collect::<Result<Vec<_>>>()?;
    let lines_applied = workers.iter().map(|w| w.lines_applied).sum();
    let snapshot = grid.snapshot();

    info!(
        lines_applied,
        min = snapshot.min,
        max = snapshot.max,
        elapsed_ms = elapsed.as_millis() as u64,
        "fault formation complete"
    );

    Ok(RunReport {
        snapshot,
        lines_applied,
        workers,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::{RunParams, generate, generate_with};
    use crate::TerrainError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn params_reject_non_positive() {
        assert!(RunParams::new(4, 4, 1, 1).is_ok());
        assert!(matches!(
            RunParams::new(0, 4, 1, 1),
            Err(TerrainError::InvalidArguments(_))
        ));
        assert!(RunParams::new(4, -2, 1, 1).is_err());
        assert!(RunParams::new(4, 4, 0, 1).is_err());
        assert!(RunParams::new(4, 4, 1, 0).is_err());
    }

    #[test]
    fn params_from_args() {
        let p = RunParams::from_args(["640", "480", "4", "200"]).unwrap();
        assert_eq!(
            p,
            RunParams {
                width: 640,
                height: 480,
                workers: 4,
                max_fault_lines: 200
            }
        );
        assert!(RunParams::from_args(["1", "2", "3"]).is_err());
        assert!(RunParams::from_args(["1", "2", "3", "4", "5"]).is_err());
        assert!(RunParams::from_args(["1", "two", "3", "4"]).is_err());
        assert!(RunParams::from_args(["1", "2", "-3", "4"]).is_err());
    }

    #[test]
    fn params_display() {
        let p = RunParams::new(3, 2, 1, 9).unwrap();
        assert_eq!(
            p.to_string(),
            "width = 3, height = 2, number of threads = 1, maximum number of fault lines = 9"
        );
    }

    #[test]
    fn generate_applies_exactly_k_lines() {
        let params = RunParams::new(30, 20, 3, 77).unwrap();
        let report = generate(&params).unwrap();
        assert_eq!(report.lines_applied, 77);
        assert_eq!(report.workers.len(), 3);
        assert_eq!(report.snapshot.values.len(), 600);
    }

    #[test]
    fn generate_with_seeded_single_worker_is_repeatable() {
        // One worker means one claim order, so a fixed seed fixes the result
        let params = RunParams::new(12, 9, 1, 30).unwrap();
        let a = generate_with(&params, |id| ChaCha8Rng::seed_from_u64(id as u64 + 5)).unwrap();
        let b = generate_with(&params, |id| ChaCha8Rng::seed_from_u64(id as u64 + 5)).unwrap();
        assert_eq!(a.snapshot, b.snapshot);
    }
}
