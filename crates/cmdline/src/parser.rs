// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse driver: scans the option region of an argument vector.

use crate::environment::Environment;
use crate::error::ParseError;
use crate::option::CliOption;
use std::collections::HashSet;

/// Consolidated option values for one parsed command line.
///
/// Starts from the defaults below and is folded left-to-right with each
/// recognized option's merge rule: help is idempotent, verbosity accumulates,
/// environments union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// True when any help flag was consumed.
    pub requires_help: bool,
    /// Sum of all verbosity contributions.
    pub verbosity: u32,
    /// Union of all requested deployment environments.
    pub environments: HashSet<Environment>,
}

/// Result of scanning the option region: the folded configuration and the
/// index where the parameter region starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionScan {
    pub config: Config,
    /// One past the last option-region token, including the terminator if
    /// present.
    pub end_index: usize,
}

/// Iterative scanner over the option region of an argument vector.
///
/// Advances the cursor by one or two tokens per option (two when the
/// lookahead was consumed as a value) and folds each recognized option into
/// the configuration. Stops at the option terminator or at the first token
/// that is neither an option nor the terminator; once stopped, later
/// `-`-prefixed tokens are parameters and are never re-interpreted.
///
/// The scanner is constructed per call and lives only for that call; the
/// cursor never escapes.
pub(crate) struct Parser<'a> {
    args: &'a [String],
    pos: usize,
    end_index: usize,
    config: Config,
}

impl<'a> Parser<'a> {
    /// Scan the option region of `args` and fold it into a configuration.
    pub(crate) fn parse(args: &'a [String]) -> Result<OptionScan, ParseError> {
        let mut parser = Parser {
            args,
            pos: 0,
            end_index: 0,
            config: Config::default(),
        };
        parser.scan_options()?;
        Ok(OptionScan {
            config: parser.config,
            end_index: parser.end_index,
        })
    }

    fn scan_options(&mut self) -> Result<(), ParseError> {
        while self.pos < self.args.len() {
            let current = &self.args[self.pos];
            let lookahead = self.args.get(self.pos + 1).map(String::as_str);
            match CliOption::from_args(current, lookahead)? {
                None => {
                    tracing::trace!(index = self.pos, token = %current, "first parameter, option scan stops");
                    break;
                }
                Some((CliOption::Terminator, _)) => {
                    self.end_index = self.pos + 1;
                    tracing::trace!(index = self.pos, "option terminator, option scan stops");
                    break;
                }
                Some((option, skip_lookahead)) => {
                    option.apply(&mut self.config);
                    tracing::trace!(token = %current, skip_lookahead, "consumed option");
                    self.pos += if skip_lookahead { 2 } else { 1 };
                    self.end_index = self.pos;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
