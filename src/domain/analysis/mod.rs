pub mod threshold;
pub mod trend;

pub use threshold::{ThresholdEvaluation, evaluate};
pub use trend::classify;
