//! Utilities for logging and progress tracking

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{log_load_complete, log_load_start, log_warning};
pub use progress::{create_main_progress_bar, finish_progress_bar};
