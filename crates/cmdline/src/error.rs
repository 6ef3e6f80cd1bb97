// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse error types.

use thiserror::Error;

/// Errors that can occur while parsing a command line.
///
/// Every error is raised at the first point of detection; the parser never
/// recovers, skips, or returns a partial configuration. The caller is
/// responsible for mapping these to exit codes or user messaging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An option-shaped token whose flag matches no recognized spelling.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A token that starts with `-` but matches no option shape at all,
    /// e.g. `-v=` or `-2`.
    #[error("malformed option: {0}")]
    MalformedOption(String),

    /// A flag that requires a value got neither an inline value nor a usable
    /// lookahead token.
    #[error("missing value for option: {0}")]
    MissingValue(String),

    /// A value was supplied but is not of the type the option expects.
    #[error("invalid value for option {option}: {value}")]
    InvalidValue { option: String, value: String },

    /// A verbosity value parsed but is below the minimum of 1.
    #[error("verbosity must be positive, got {0}")]
    VerbosityNotPositive(u32),

    /// A value was supplied to an option that does not take one.
    #[error("option does not accept a value: {0}")]
    UnexpectedValue(String),

    /// An environment name outside the closed set of recognized names.
    #[error("unknown environment name: {0}")]
    UnknownEnvironment(String),

    /// The parsed command line named no deployment environment.
    #[error("no environments specified")]
    NoEnvironments,

    /// The parsed command line had no positional parameters.
    #[error("no parameters specified")]
    NoParameters,
}
