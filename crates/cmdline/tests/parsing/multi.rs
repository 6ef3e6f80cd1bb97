// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Packed short option sets.

use dral_cmdline::{Environment, ParseError};

#[yare::parameterized(
    two_verbose        = { "-vv", false, 2 },
    three_verbose      = { "-vvv", false, 3 },
    verbose_then_help  = { "-vvvh", true, 3 },
    help_pair          = { "-hh", true, 0 },
    interleaved        = { "-hvh", true, 1 },
    help_then_verbose  = { "-hv", true, 1 },
)]
fn packed_sets_expand(token: &str, requires_help: bool, verbosity: u32) {
    let parsed = crate::parse_ok(&[token, "-e=local", "app"]);
    assert_eq!(
        parsed.config,
        crate::config(requires_help, verbosity, &[Environment::Local])
    );
}

#[test]
fn packed_set_combines_with_long_options() {
    let parsed = crate::parse_ok(&["-hv", "--verbose", "-e=local", "app"]);
    assert_eq!(parsed.config, crate::config(true, 2, &[Environment::Local]));
}

#[test]
fn packed_set_never_consumes_the_lookahead() {
    // The 3 after -vv is a parameter, not a verbosity value
    let parsed = crate::parse_ok(&["-e=local", "-vv", "3"]);
    assert_eq!(parsed.config, crate::config(false, 2, &[Environment::Local]));
    assert_eq!(parsed.parameters, crate::params(&["3"]));
}

#[test]
fn unpackable_character_disqualifies_the_token() {
    // x is not a help or verbosity short flag, so the token splits as a
    // verbosity flag with an unusable value
    let err = crate::parse(&["-vx", "-e=local", "app"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidValue {
            option: "-v".to_string(),
            value: "x".to_string(),
        }
    );
}

#[test]
fn environment_flag_cannot_be_packed() {
    // No option shape covers a packed set with a value
    let err = crate::parse(&["-vve=local", "app"]).unwrap_err();
    assert_eq!(err, ParseError::MalformedOption("-vve=local".to_string()));
}

#[test]
fn packed_set_cannot_carry_a_value() {
    let err = crate::parse(&["-vh=2", "-e=local", "app"]).unwrap_err();
    assert_eq!(err, ParseError::MalformedOption("-vh=2".to_string()));
}
