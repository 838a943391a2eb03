//! CLI command implementations

mod config_gen;
mod shorten;

pub use config_gen::config_generate;
pub use shorten::shorten_url;
