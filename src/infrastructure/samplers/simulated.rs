use std::sync::Mutex;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::parameter::{Parameter, ParameterCategory};
use crate::domain::entities::snapshot::StationSnapshot;
use crate::domain::ports::sampler::{SampleError, Sampler};

/// Static seed catalogue of the simulated station.
///
/// Thresholds follow the uniform falling semantics of the evaluator: a
/// parameter degrades as its reading drops toward the thresholds.
// TODO: turbidity and total coliform degrade upward; falling-threshold
// semantics inverts them. Needs a per-parameter direction flag before those
// two thresholds mean anything.
fn seed_catalogue() -> Vec<Parameter> {
    let seed = |id: &str,
                name: &str,
                value: f64,
                unit: &str,
                warning: f64,
                critical: f64,
                min: f64,
                max: f64,
                category: ParameterCategory| Parameter {
        id: id.to_string(),
        name: name.to_string(),
        value,
        unit: unit.to_string(),
        warning_threshold: warning,
        critical_threshold: critical,
        min_value: min,
        max_value: max,
        category,
        history: vec![value],
    };

    vec![
        seed("ph", "pH", 7.2, "pH", 6.5, 6.0, 0.0, 14.0, ParameterCategory::Chemical),
        seed(
            "dissolved_oxygen",
            "Dissolved Oxygen",
            8.5,
            "mg/L",
            6.0,
            4.0,
            0.0,
            14.0,
            ParameterCategory::Chemical,
        ),
        seed(
            "temperature",
            "Temperature",
            18.5,
            "°C",
            8.0,
            4.0,
            0.0,
            40.0,
            ParameterCategory::Physical,
        ),
        seed(
            "turbidity",
            "Turbidity",
            0.8,
            "NTU",
            0.3,
            0.1,
            0.0,
            10.0,
            ParameterCategory::Physical,
        ),
        seed(
            "conductivity",
            "Conductivity",
            350.0,
            "µS/cm",
            150.0,
            50.0,
            0.0,
            2000.0,
            ParameterCategory::Physical,
        ),
        seed(
            "free_chlorine",
            "Free Chlorine",
            0.8,
            "mg/L",
            0.4,
            0.2,
            0.0,
            4.0,
            ParameterCategory::Chemical,
        ),
        seed(
            "orp",
            "Redox Potential",
            450.0,
            "mV",
            300.0,
            200.0,
            0.0,
            800.0,
            ParameterCategory::Chemical,
        ),
        seed(
            "total_coliform",
            "Total Coliform",
            12.0,
            "CFU/100mL",
            5.0,
            1.0,
            0.0,
            100.0,
            ParameterCategory::Biological,
        ),
    ]
}

struct StationState {
    rng: StdRng,
    parameters: Vec<Parameter>,
}

/// Simulated monitoring station.
///
/// Each sample advances every parameter by a bounded random-walk step and
/// appends the reading to its history ring. Readings are clamped to the
/// parameter's [min, max] scale. A fixed seed makes runs reproducible.
pub struct SimulatedStation {
    state: Mutex<StationState>,
    step_fraction: f64,
    history_window: usize,
}

impl SimulatedStation {
    #[must_use]
    pub fn new(step_fraction: f64, history_window: usize, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            state: Mutex::new(StationState {
                rng,
                parameters: seed_catalogue(),
            }),
            step_fraction,
            // The trend classifier needs at least two readings.
            history_window: history_window.max(2),
        }
    }
}

impl Sampler for SimulatedStation {
    fn sample(&self) -> Result<StationSnapshot, SampleError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| SampleError::SensorsUnavailable("station state lock poisoned".into()))?;
        let StationState { rng, parameters } = &mut *state;

        for param in parameters.iter_mut() {
            let span = param.max_value - param.min_value;
            let step = rng.gen_range(-1.0..=1.0) * self.step_fraction * span;
            param.value = (param.value + step).clamp(param.min_value, param.max_value);
            param.history.push(param.value);
            if param.history.len() > self.history_window {
                param.history.remove(0);
            }
        }

        Ok(StationSnapshot {
            timestamp: Utc::now(),
            parameters: parameters.clone(),
        })
    }
}
