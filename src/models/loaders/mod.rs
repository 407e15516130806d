pub mod toml_loader;

pub use toml_loader::{load_scoring_policy, parse_scoring_policy};
