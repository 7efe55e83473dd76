//! Command implementations for OxiForm CLI.

pub mod convert;
pub mod list;

pub use convert::{Direction, cmd_convert};
pub use list::cmd_list;
pub use test::cmd_test;
