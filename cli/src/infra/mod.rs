//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: config and `known_hosts`
//! files, and reading console output.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod fs;
pub mod input;
pub mod known_hosts;

pub use config::YamlConfigStore;
pub use input::read_console_output;
pub use known_hosts::KnownHostsManager;
