pub mod poll_commands;

pub use poll_commands::*;
