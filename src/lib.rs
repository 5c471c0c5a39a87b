pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod gitlab;
pub mod logging;
pub mod pruner;
pub mod selector;
pub mod settings;
pub mod ui;

pub use error::{DebranchError, Result};
