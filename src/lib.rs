// src/lib.rs
#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod logger;
pub mod model;
pub mod specs;
pub mod validate;

pub mod progress;
pub mod runner;
pub mod search;
pub mod source;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, ParseError};
pub use model::{Author, DayProgram, Presentation, Program, Session, SessionCategory};
