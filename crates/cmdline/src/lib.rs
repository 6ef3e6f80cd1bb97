// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command-line parsing for the dralithus deploy tool.
//!
//! Converts an argument vector (the trailing portion of a process argument
//! list) into a configuration of recognized options plus a set of positional
//! parameters, or a typed error for malformed input.
//!
//! # Quick Start
//!
//! ```ignore
//! use dral_cmdline::parse_command_line;
//!
//! let args: Vec<String> = std::env::args().skip(1).collect();
//! let parsed = parse_command_line(&args)?;
//! if parsed.config.requires_help {
//!     // print usage
//! }
//! # Ok::<(), dral_cmdline::ParseError>(())
//! ```
//!
//! # Structure
//!
//! The parser is layered bottom-up:
//!
//! ```text
//! token         shape predicates, flag/value splitting
//! option        CliOption variants (help, verbosity, environment,
//!               terminator, packed short sets) and recognition
//! parser        cursor scan with one-token lookahead, merge fold
//! command_line  required-configuration checks, (config, parameters)
//! ```
//!
//! Parsing is a pure function: no shared state, no resources, no recovery.
//! Every recognized option's value is validated at parse time against its
//! declared domain, and on error no partial configuration is returned.

mod command_line;
mod environment;
mod error;
mod option;
mod parser;
mod token;

pub use command_line::{parse_command_line, CommandLine};
pub use environment::Environment;
pub use error::ParseError;
pub use option::{CliOption, EnvironmentOption, HelpOption, MultiOption, VerbosityOption};
pub use parser::Config;
