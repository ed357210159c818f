//! CLI subcommand implementations

pub mod bench;
pub mod compare;
pub mod play;
pub mod solve;
