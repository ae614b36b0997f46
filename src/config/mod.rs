pub mod cli;
pub mod configuration;

pub use configuration::AcommitConfig;
