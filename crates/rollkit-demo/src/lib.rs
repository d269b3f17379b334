#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod headlines;
pub mod text_surface;

pub use cli::run_from_env;
pub use error::{DemoError, Result};
