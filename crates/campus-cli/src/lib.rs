//! Library side of the `campus` command: argument definitions, commands,
//! table output and logging setup.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
