//! Batch redaction of delimited files whose `data_json` column holds
//! key-value payloads.
//!
//! This crate is the I/O layer around `pii_redaction`: it parses arguments,
//! sets up logging, streams rows through [`pii_redaction::process_record`],
//! and maps failures to exit codes. All detection and masking lives in the
//! library.

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(
    clippy::all,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::unused_self
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod batch;
pub mod config;
pub mod error;
pub mod logging;

pub use batch::{run, Summary};
pub use config::{Cli, Config};
pub use error::CliError;
