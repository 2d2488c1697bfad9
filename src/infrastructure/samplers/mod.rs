pub mod simulated;

pub use simulated::SimulatedStation;
