mod check;
mod config;
mod context;
mod init;

pub use check::run_check;
pub use config::run_config;
pub use init::{generate_config_template, run_init};
