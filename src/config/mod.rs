//! JSON runtime configuration shared by the command-line front end.

pub mod page;

pub use page::{load_config, OutputConfig, RuntimeConfig};
