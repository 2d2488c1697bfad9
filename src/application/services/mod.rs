pub mod alert_center;
pub mod monitor;

pub use alert_center::AlertCenter;
pub use monitor::{MonitorCycleResult, MonitorService};
