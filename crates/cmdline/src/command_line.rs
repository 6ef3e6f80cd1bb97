// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing facade: the option scan plus required-configuration checks.

use crate::error::ParseError;
use crate::parser::{Config, Parser};
use std::collections::HashSet;

/// A fully parsed and validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Consolidated option values.
    pub config: Config,
    /// Trailing positional arguments. Unordered; duplicates coalesce.
    pub parameters: HashSet<String>,
}

/// Parse an argument vector into a configuration and a parameter set.
///
/// `args` is the trailing portion of the process argument list, without the
/// program name. Fails on the first malformed token, and afterwards if no
/// deployment environment was named or no positional parameters remain.
/// Requesting help relaxes neither requirement. On error no partial
/// configuration is returned.
///
/// # Examples
///
/// ```ignore
/// use dral_cmdline::parse_command_line;
///
/// let args: Vec<String> = ["-v", "-e=local", "myapp"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let parsed = parse_command_line(&args)?;
/// assert_eq!(parsed.config.verbosity, 1);
/// assert!(parsed.parameters.contains("myapp"));
/// # Ok::<(), dral_cmdline::ParseError>(())
/// ```
pub fn parse_command_line(args: &[String]) -> Result<CommandLine, ParseError> {
    let scan = Parser::parse(args)?;
    let parameters: HashSet<String> = args[scan.end_index..].iter().cloned().collect();
    if scan.config.environments.is_empty() {
        return Err(ParseError::NoEnvironments);
    }
    if parameters.is_empty() {
        return Err(ParseError::NoParameters);
    }
    tracing::debug!(
        requires_help = scan.config.requires_help,
        verbosity = scan.config.verbosity,
        environments = scan.config.environments.len(),
        parameters = parameters.len(),
        "parsed command line"
    );
    Ok(CommandLine {
        config: scan.config,
        parameters,
    })
}

#[cfg(test)]
#[path = "command_line_tests.rs"]
mod tests;
