// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help option: spellings, idempotence, and the no-bypass policy.

use dral_cmdline::{Environment, ParseError};

#[yare::parameterized(
    short = { "-h" },
    long  = { "--help" },
)]
fn help_flag_sets_requires_help(flag: &str) {
    let parsed = crate::parse_ok(&[flag, "-e=local", "app"]);
    assert_eq!(parsed.config, crate::config(true, 0, &[Environment::Local]));
}

#[yare::parameterized(
    repeated_short      = { &["-h", "-h"] },
    repeated_long       = { &["--help", "--help"] },
    mixed_spellings     = { &["-h", "--help"] },
    packed_and_single   = { &["-hh", "-h"] },
)]
fn help_is_idempotent(flags: &[&str]) {
    let mut args = flags.to_vec();
    args.extend(["-e=local", "app"]);
    let parsed = crate::parse_ok(&args);
    assert_eq!(parsed.config, crate::config(true, 0, &[Environment::Local]));
}

#[test]
fn help_alone_still_requires_an_environment() {
    assert_eq!(crate::parse(&["-h"]), Err(ParseError::NoEnvironments));
    assert_eq!(crate::parse(&["--help"]), Err(ParseError::NoEnvironments));
}

#[test]
fn help_still_requires_parameters() {
    assert_eq!(crate::parse(&["-h", "-e=local"]), Err(ParseError::NoParameters));
}

#[yare::parameterized(
    short_equal = { "-h=True" },
    long_equal  = { "--help=yes" },
    short_digit = { "-h=1" },
)]
fn help_never_accepts_a_value(token: &str) {
    let err = crate::parse(&[token, "-e=local", "app"]).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedValue(_)));
    crate::assert_err_contains(&err, &["does not accept a value"]);
}

#[test]
fn help_does_not_consume_a_lookahead() {
    // The token after -h is parsed in its own right
    let parsed = crate::parse_ok(&["-h", "-v", "-e=local", "app"]);
    assert_eq!(parsed.config, crate::config(true, 1, &[Environment::Local]));
}
