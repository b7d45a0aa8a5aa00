// Adapters - External system implementations

pub mod console;
pub mod exec_process;
pub mod toml_config;
pub mod tracing_log;
pub mod which_locator;

// Re-export adapters
pub use console::Console;
pub use exec_process::SystemRunner;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::{init_logging, LogFormat, LogLevel};
pub use which_locator::WhichLocator;
