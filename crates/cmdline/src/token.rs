// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical classification of raw argument tokens.
//!
//! These are pure string predicates: they decide whether a token *could* be
//! an option, a parameter, or the option terminator, and split a flag from an
//! inline value. No semantic variant is attached at this layer.

use regex::Regex;
use std::sync::LazyLock;

/// Short option, optionally with a concatenated count: `-v`, `-v2`.
#[allow(clippy::expect_used)]
static SHORT_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z][0-9]*$").expect("constant regex pattern is valid"));

/// Short option with an `=`-joined value: `-v=2`, `-e=local`.
#[allow(clippy::expect_used)]
static SHORT_OPTION_WITH_EQUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z]=.+$").expect("constant regex pattern is valid"));

/// Packed short option set: `-vh`, `-vvv`.
#[allow(clippy::expect_used)]
static SHORT_OPTION_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z]{2,}$").expect("constant regex pattern is valid"));

/// Long option: `--help`, `--verbose`.
#[allow(clippy::expect_used)]
static LONG_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--[a-zA-Z][a-zA-Z_-]+$").expect("constant regex pattern is valid")
});

/// Long option with an `=`-joined value: `--verbosity=2`, `--env=local,test`.
#[allow(clippy::expect_used)]
static LONG_OPTION_WITH_EQUAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--[a-zA-Z][a-zA-Z_-]+=.*$").expect("constant regex pattern is valid")
});

/// Check whether a token has the shape of an option.
///
/// A token is option-shaped if it is the option terminator `--` or matches one
/// of the short, packed-short, or long spellings, with or without a value.
/// Shape says nothing about whether the flag is actually recognized.
pub(crate) fn maybe_option(token: &str) -> bool {
    token == "--"
        || SHORT_OPTION.is_match(token)
        || SHORT_OPTION_WITH_EQUAL.is_match(token)
        || SHORT_OPTION_SET.is_match(token)
        || LONG_OPTION.is_match(token)
        || LONG_OPTION_WITH_EQUAL.is_match(token)
}

/// Check whether a token could be a positional parameter.
///
/// A parameter is any non-empty token that does not start with a hyphen.
pub(crate) fn maybe_parameter(token: &str) -> bool {
    !token.is_empty() && !token.starts_with('-')
}

/// Split a token into its flag (dashes preserved) and an optional inline value.
///
/// Splits at the first `=` when one is present. A single-dash token longer
/// than two characters whose second character is a letter splits after that
/// letter instead, so `-v2` becomes (`-v`, `2`). Everything else is a bare
/// flag with no value.
pub(crate) fn split_flag_value(token: &str) -> (&str, Option<&str>) {
    if let Some((flag, value)) = token.split_once('=') {
        return (flag, Some(value));
    }
    if !token.starts_with("--")
        && token.len() > 2
        && token.as_bytes().get(1).is_some_and(u8::is_ascii_alphabetic)
    {
        return (&token[..2], Some(&token[2..]));
    }
    (token, None)
}

/// Strip the leading hyphens from a flag, leaving the flag body.
pub(crate) fn flag_body(flag: &str) -> &str {
    flag.trim_start_matches('-')
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
