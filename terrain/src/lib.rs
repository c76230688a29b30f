// terrain holds the fault-line engine: grid, geometry, workers and rendering
pub mod budget;
pub mod coordinator;
pub mod error;
pub mod fault;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod worker;

pub use budget::FaultBudget;
pub use coordinator::{RunParams, RunReport, generate, generate_with};
pub use error::{Result, TerrainError};
pub use fault::FaultLine;
pub use geometry::{Edge, Point, Side};
pub use grid::{HeightGrid, HeightSnapshot};
pub use render::{Colormap, remap};
pub use worker::{FaultWorker, WorkerReport, WorkerState};

// Largest height delta a single fault line may apply
pub const MAX_ADJUST: i64 = 10;
