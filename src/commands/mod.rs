//! CLI command implementations for savingscalc.
//!
//! - **calculate**: run one scenario and render the report
//! - **regions**: list region presets
//! - **init**: write a starter `.savingscalc.toml`

pub mod calculate;
pub mod init;
pub mod regions;

pub use calculate::{prepare_report, run_calculate, CalculateConfig};
pub use init::{init_config, init_config_in};
pub use regions::list_regions;
