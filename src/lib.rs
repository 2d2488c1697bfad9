//! naiad — water-quality monitoring daemon.
//!
//! Samples a set of water-quality parameters, evaluates them against
//! warning/critical thresholds, classifies short-window trends, and
//! dispatches alerts to the configured notification channels. CPU-bound
//! numeric routines run on a dedicated worker thread behind a
//! request/response channel.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
