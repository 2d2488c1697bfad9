pub mod compute;
pub mod notifications;
pub mod samplers;
