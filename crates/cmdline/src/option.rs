// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option variants and recognition.
//!
//! Each variant declares the flag spellings it accepts, how it resolves a
//! value from the current token or the lookahead, and how it merges into the
//! accumulating [`Config`]. [`CliOption::from_args`] is the single entry the
//! driver uses: it tries the variants in a fixed order and classifies
//! everything that is not a recognized option.

use crate::environment::Environment;
use crate::error::ParseError;
use crate::parser::Config;
use crate::token::{flag_body, maybe_option, maybe_parameter, split_flag_value};
use std::collections::HashSet;
use std::str::FromStr;

/// The `-h`/`--help` option. Takes no value; repeated occurrences are
/// idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOption {
    flag: String,
}

impl HelpOption {
    pub(crate) const FLAGS: &'static [&'static str] = &["-h", "--help"];
    pub(crate) const SHORT: char = 'h';

    /// True iff the token spells a help flag, bare or `=`-joined.
    ///
    /// A short-concatenated pseudo-value (`-h2`) is not claimed here so it
    /// falls through to the dispatcher's error reporting, while `-hh` stays
    /// available as a packed option set.
    fn claims(token: &str) -> bool {
        let (flag, value) = split_flag_value(token);
        Self::FLAGS.contains(&flag) && (value.is_none() || token.contains('='))
    }

    fn make(token: &str) -> Result<HelpOption, ParseError> {
        let (flag, value) = split_flag_value(token);
        if value.is_some() {
            return Err(ParseError::UnexpectedValue(flag.to_string()));
        }
        Ok(HelpOption {
            flag: flag_body(flag).to_string(),
        })
    }

    /// The exact flag spelling encountered, `h` or `help`.
    pub fn flag(&self) -> &str {
        &self.flag
    }
}

/// The `-v`/`--verbose`/`--verbosity` option. Carries a positive level and
/// accumulates across occurrences; a bare flag contributes 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbosityOption {
    flag: String,
    level: u32,
}

impl VerbosityOption {
    pub(crate) const FLAGS: &'static [&'static str] = &["-v", "--verbose", "--verbosity"];
    pub(crate) const SHORT: char = 'v';

    /// Parse an unsigned decimal count: digits only, no sign, no separators.
    fn parse_count(value: &str) -> Option<u32> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value.parse().ok()
    }

    /// True iff the token spells a verbosity flag and any inline value is
    /// numeric. The type check keeps `-v2` here while `-vhv` falls through to
    /// [`MultiOption`].
    fn claims(token: &str) -> bool {
        let (flag, value) = split_flag_value(token);
        Self::FLAGS.contains(&flag) && value.map_or(true, |v| Self::parse_count(v).is_some())
    }

    fn make(current: &str, lookahead: Option<&str>) -> Result<(VerbosityOption, bool), ParseError> {
        let (spelled, inline) = split_flag_value(current);
        let flag = flag_body(spelled).to_string();
        if let Some(value) = inline {
            let level = Self::parse_count(value).ok_or_else(|| ParseError::InvalidValue {
                option: spelled.to_string(),
                value: value.to_string(),
            })?;
            if level < 1 {
                return Err(ParseError::VerbosityNotPositive(level));
            }
            return Ok((VerbosityOption { flag, level }, false));
        }
        if let Some(level) = lookahead.and_then(Self::parse_count) {
            if level < 1 {
                return Err(ParseError::VerbosityNotPositive(level));
            }
            return Ok((VerbosityOption { flag, level }, true));
        }
        Ok((VerbosityOption { flag, level: 1 }, false))
    }

    /// The exact flag spelling encountered, `v`, `verbose`, or `verbosity`.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// The level this occurrence contributes.
    pub fn level(&self) -> u32 {
        self.level
    }
}

/// The `-e`/`--env`/`--environment` option. A comma-separated list of
/// environment names is mandatory, inline or as the next token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentOption {
    flag: String,
    environments: HashSet<Environment>,
}

impl EnvironmentOption {
    pub(crate) const FLAGS: &'static [&'static str] = &["-e", "--env", "--environment"];

    fn claims(token: &str) -> bool {
        let (flag, _) = split_flag_value(token);
        Self::FLAGS.contains(&flag)
    }

    /// Syntactic check on a candidate value: non-empty comma-separated
    /// components, no whitespace, and not itself option-shaped. Domain
    /// membership is checked separately in [`EnvironmentOption::make`].
    fn is_name_list(value: &str) -> bool {
        !value.is_empty()
            && !value.starts_with('-')
            && !value.contains(char::is_whitespace)
            && value.split(',').all(|name| !name.is_empty())
    }

    fn parse_names(value: &str) -> Result<HashSet<Environment>, ParseError> {
        value.split(',').map(Environment::from_str).collect()
    }

    fn make(
        current: &str,
        lookahead: Option<&str>,
    ) -> Result<(EnvironmentOption, bool), ParseError> {
        let (spelled, inline) = split_flag_value(current);
        let flag = flag_body(spelled).to_string();
        if let Some(value) = inline {
            if !Self::is_name_list(value) {
                return Err(ParseError::InvalidValue {
                    option: spelled.to_string(),
                    value: value.to_string(),
                });
            }
            let environments = Self::parse_names(value)?;
            return Ok((EnvironmentOption { flag, environments }, false));
        }
        if let Some(value) = lookahead.filter(|v| Self::is_name_list(v)) {
            let environments = Self::parse_names(value)?;
            return Ok((EnvironmentOption { flag, environments }, true));
        }
        Err(ParseError::MissingValue(spelled.to_string()))
    }

    /// The exact flag spelling encountered, `e`, `env`, or `environment`.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// The environments this occurrence names.
    pub fn environments(&self) -> &HashSet<Environment> {
        &self.environments
    }
}

/// A packed short option set: `-` followed by two or more boolean or
/// incrementing short flags, e.g. `-vh` or `-vvv`.
///
/// Sugar over its components: the merge is the composition of the component
/// merges in left-to-right order. Never consumes the lookahead, so each
/// component contributes its default (help true, verbosity +1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiOption {
    options: Vec<CliOption>,
}

impl MultiOption {
    /// Only boolean or incrementing short flags can be packed.
    fn is_packable(c: char) -> bool {
        c == HelpOption::SHORT || c == VerbosityOption::SHORT
    }

    /// True iff every packed character is a packable short flag. One
    /// unrecognized character disqualifies the whole token.
    fn claims(token: &str) -> bool {
        let Some(packed) = token.strip_prefix('-') else {
            return false;
        };
        !token.starts_with("--")
            && packed.chars().count() >= 2
            && packed.chars().all(Self::is_packable)
    }

    fn make(token: &str) -> MultiOption {
        let mut options = Vec::new();
        for c in token.chars().skip(1) {
            if c == HelpOption::SHORT {
                options.push(CliOption::Help(HelpOption {
                    flag: HelpOption::SHORT.to_string(),
                }));
            } else if c == VerbosityOption::SHORT {
                options.push(CliOption::Verbosity(VerbosityOption {
                    flag: VerbosityOption::SHORT.to_string(),
                    level: 1,
                }));
            }
        }
        MultiOption { options }
    }

    /// The concatenated component spellings, e.g. `vhv`.
    pub fn flag(&self) -> String {
        self.options
            .iter()
            .map(|option| match option {
                CliOption::Help(help) => help.flag(),
                CliOption::Verbosity(verbosity) => verbosity.flag(),
                _ => "",
            })
            .collect()
    }

    /// The component options, in the order they were packed.
    pub fn options(&self) -> &[CliOption] {
        &self.options
    }
}

/// A recognized command-line option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOption {
    Help(HelpOption),
    Verbosity(VerbosityOption),
    Environment(EnvironmentOption),
    /// The literal `--`, which halts option scanning.
    Terminator,
    Multi(MultiOption),
}

impl CliOption {
    /// Recognize the option at the head of the argument stream.
    ///
    /// Tries the variants in a fixed order (terminator, help, verbosity,
    /// environment, packed set); the first to claim the token constructs the
    /// option and reports whether the lookahead was consumed as its value.
    /// Returns `Ok(None)` when the token is a positional parameter.
    ///
    /// When no variant claims an option-shaped token, the failure is
    /// classified against the universe of supported flag spellings: a known
    /// flag with an unusable value is an invalid-value error, anything else
    /// is an unknown option. Tokens that start with `-` but match no option
    /// shape at all are malformed.
    pub fn from_args(
        current: &str,
        lookahead: Option<&str>,
    ) -> Result<Option<(CliOption, bool)>, ParseError> {
        if current == "--" {
            return Ok(Some((CliOption::Terminator, false)));
        }
        if maybe_option(current) {
            if HelpOption::claims(current) {
                return Ok(Some((CliOption::Help(HelpOption::make(current)?), false)));
            }
            if VerbosityOption::claims(current) {
                let (option, skip) = VerbosityOption::make(current, lookahead)?;
                return Ok(Some((CliOption::Verbosity(option), skip)));
            }
            if EnvironmentOption::claims(current) {
                let (option, skip) = EnvironmentOption::make(current, lookahead)?;
                return Ok(Some((CliOption::Environment(option), skip)));
            }
            if MultiOption::claims(current) {
                return Ok(Some((CliOption::Multi(MultiOption::make(current)), false)));
            }
            // Option-shaped, but no variant claimed it
            let (flag, value) = split_flag_value(current);
            if Self::supported_flag(flag) {
                return Err(ParseError::InvalidValue {
                    option: flag.to_string(),
                    value: value.unwrap_or_default().to_string(),
                });
            }
            return Err(ParseError::UnknownOption(current.to_string()));
        }
        if maybe_parameter(current) {
            return Ok(None);
        }
        Err(ParseError::MalformedOption(current.to_string()))
    }

    /// The universe of supported flag spellings across all variants.
    fn supported_flag(flag: &str) -> bool {
        HelpOption::FLAGS.contains(&flag)
            || VerbosityOption::FLAGS.contains(&flag)
            || EnvironmentOption::FLAGS.contains(&flag)
    }

    /// Merge this option into the configuration, per its variant's rule.
    pub(crate) fn apply(&self, config: &mut Config) {
        match self {
            CliOption::Help(_) => config.requires_help = true,
            CliOption::Verbosity(option) => config.verbosity += option.level,
            CliOption::Environment(option) => {
                config.environments.extend(option.environments.iter().copied());
            }
            // The driver halts on the terminator before merging it.
            CliOption::Terminator => {}
            CliOption::Multi(option) => {
                for inner in option.options() {
                    inner.apply(config);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "option_tests.rs"]
mod tests;
