//! CLI module for the textmode command-line interface

pub mod args;
pub mod commands;
