mod monitor_test;
mod rules_test;
mod worker_test;
