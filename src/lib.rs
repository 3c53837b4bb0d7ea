//! Alibi: template-driven excuse generator.
//!
//! The core pipeline is template selection and substitution: given an
//! [`ExcuseRequest`], pick a phrase template from the catalog (falling back
//! across categories and tones), fill in time-derived placeholders, and
//! apply length-based post-processing. Everything around that core (the
//! CLI, config file, and history log) is a thin layer over these modules.
//!
//! ```no_run
//! use alibi::{ExcuseRequest, Generator};
//!
//! let mut generator = Generator::new()?;
//! let excuse = generator.generate(&ExcuseRequest::default());
//! println!("{}", excuse);
//! # Ok::<(), alibi::AlibiError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod history;
pub mod request;
pub mod template;

pub use catalog::Catalog;
pub use error::{AlibiError, Result};
pub use generator::Generator;
pub use history::Session;
pub use request::{Audience, Category, ExcuseRequest, Length, Tone};
