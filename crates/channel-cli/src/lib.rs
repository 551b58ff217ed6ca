//! Library half of the `channel-dash` binary.
//!
//! Command bodies live here so they can be tested without spawning the
//! binary; `main.rs` only parses arguments and installs logging.

pub mod commands;
pub mod logging;

pub use commands::{
    load_config, render_check, render_generate, render_layout, write_output, OutputFormat,
};
pub use logging::init_logging;
