use thiserror::Error;

use crate::domain::entities::snapshot::StationSnapshot;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("failed to read station sensors: {0}")]
    SensorsUnavailable(String),
    #[error("timeout while sampling")]
    Timeout,
}

pub trait Sampler: Send + Sync {
    /// Take a full station snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SampleError` if the sensors cannot be read or sampling
    /// times out.
    fn sample(&self) -> Result<StationSnapshot, SampleError>;
}
