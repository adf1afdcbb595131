pub mod activity;
pub mod cli;
pub mod commands;
pub mod console;
pub mod env;
pub mod error;
pub mod format;
pub mod log;
pub mod outcome;
pub mod result;
