pub mod alert_panel;
pub mod dashboard;
pub mod parameter_list;
