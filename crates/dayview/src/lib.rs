#![forbid(unsafe_code)]

pub mod check;
pub mod cli;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;

pub use cli::run_from_env;
pub use error::{DayviewError, Result};
