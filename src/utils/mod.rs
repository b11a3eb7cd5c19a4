//! Shared IO and logging helpers

pub mod io;
pub mod logging;

pub use io::{safe_read_to_string, validate_directory};
pub use logging::{log_load_complete, log_load_start, log_warning};
