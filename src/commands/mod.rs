//! CLI command handlers, one submodule per action.

pub mod build;
pub mod clean;
pub mod lint;

pub use build::cmd_build;
pub use clean::cmd_clean;
pub use lint::cmd_lint;
pub use test::cmd_test;
