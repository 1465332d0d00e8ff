//! Command-line host for swatchbook palettes.
//!
//! The binary keeps its "local storage" in a JSON file and uses an
//! in-memory document, printing the resulting stylesheet or picker markup.
//! Everything lives in this library so the integration tests can drive
//! [`run`] without spawning a process.

mod cli;
mod swatch;

pub use cli::{run, Cli, Command};
pub use swatch::{parse_hex, rgb_to_ansi256, swatch};
