use rand::Rng;
use tracing::{debug, error, trace};

use crate::budget::FaultBudget;
use crate::error::Result;
use crate::fault::FaultLine;
use crate::grid::HeightGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    // Waiting to reserve the next slot from the budget
    Claiming,
    // Holding a slot; the line still has to be swept over the grid
    Sweeping(FaultLine),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub id: usize,
    pub lines_applied: usize,
}

// Claims fault lines from the shared budget and sweeps them over the shared
// grid until the budget runs dry. Each worker brings its own random source.
pub struct FaultWorker<'a, R> {
    id: usize,
    grid: &'a HeightGrid,
    budget: &'a FaultBudget,
    rng: R,
    state: WorkerState,
    lines_applied: usize,
}

impl<'a, R: Rng> FaultWorker<'a, R> {
    pub fn new(id: usize, grid: &'a HeightGrid, budget: &'a FaultBudget, rng: R) -> Self {
        Self {
            id,
            grid,
            budget,
            rng,
            state: WorkerState::Claiming,
            lines_applied: 0,
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn lines_applied(&self) -> usize {
        self.lines_applied
    }

    // Perform one transition and return the new state
    pub fn step(&mut self) -> Result<WorkerState> {
        self.state = match self.state {
            WorkerState::Claiming => match self.budget.try_claim() {
                Some(slot) => {
                    let line =
                        FaultLine::random(&mut self.rng, self.grid.width(), self.grid.height());
                    trace!(worker = self.id, slot, ?line, "claimed fault line");
                    WorkerState::Sweeping(line)
                }
                None => WorkerState::Done,
            },
            WorkerState::Sweeping(line) => {
                if let Err(e) = line.apply(self.grid) {
                    // Lines are always sampled inside the grid, so this is a logic defect
                    error!(worker = self.id, ?line, "fault sweep failed: {e}");
                    self.state = WorkerState::Done;
                    return Err(e);
                }
                self.lines_applied += 1;
                WorkerState::Claiming
            }
            WorkerState::Done => WorkerState::Done,
        };
        Ok(self.state)
    }

    // Drive the worker until the budget is exhausted
    pub fn run(mut self) -> Result<WorkerReport> {
        while self.step()? != WorkerState::Done {}
        debug!(
            worker = self.id,
            lines = self.lines_applied,
            "worker finished"
        );
        Ok(WorkerReport {
            id: self.id,
            lines_applied: self.lines_applied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FaultWorker, WorkerState};
    use crate::budget::FaultBudget;
    use crate::grid::HeightGrid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn worker_walks_the_state_machine() {
        let grid = HeightGrid::new(5, 5).unwrap();
        let budget = FaultBudget::new(1);
        let mut w = FaultWorker::new(0, &grid, &budget, ChaCha8Rng::seed_from_u64(1));

        assert_eq!(w.state(), WorkerState::Claiming);
        assert!(matches!(w.step().unwrap(), WorkerState::Sweeping(_)));
        assert_eq!(w.step().unwrap(), WorkerState::Claiming);
        assert_eq!(w.lines_applied(), 1);
        assert_eq!(w.step().unwrap(), WorkerState::Done);
        // Done is terminal
        assert_eq!(w.step().unwrap(), WorkerState::Done);
        assert_eq!(w.lines_applied(), 1);
    }

    #[test]
    fn worker_run_drains_budget() {
        let grid = HeightGrid::new(8, 6).unwrap();
        let budget = FaultBudget::new(25);
        let report = FaultWorker::new(3, &grid, &budget, ChaCha8Rng::seed_from_u64(42))
            .run()
            .unwrap();
        assert_eq!(report.id, 3);
        assert_eq!(report.lines_applied, 25);
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn workers_share_one_budget() {
        let grid = HeightGrid::new(16, 16).unwrap();
        let budget = FaultBudget::new(200);
        let total: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|id| {
                    let rng = ChaCha8Rng::seed_from_u64(id as u64);
                    let worker = FaultWorker::new(id, &grid, &budget, rng);
                    s.spawn(move || worker.run().unwrap().lines_applied)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });
        assert_eq!(total, 200);
    }
}
