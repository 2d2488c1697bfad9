pub mod composite;
pub mod desktop;
pub mod log_file;
pub mod terminal;

pub use composite::CompositeNotifier;
pub use desktop::DesktopNotifier;
pub use log_file::LogFileNotifier;
pub use terminal::TerminalNotifier;
