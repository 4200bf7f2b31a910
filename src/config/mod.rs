//! Configuration module
//!
//! Handles loading, parsing, and validating the TOML configuration file
//! that names the target site, the page budget, and the output database.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, CrawlConfig, OutputConfig, SiteConfig};
