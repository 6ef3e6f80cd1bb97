// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option terminator: halting the option region.

use dral_cmdline::{Environment, ParseError};

#[test]
fn tokens_after_terminator_are_parameters() {
    let parsed = crate::parse_ok(&["-e=local", "--", "-v", "-h", "--bogus"]);
    assert_eq!(parsed.config, crate::config(false, 0, &[Environment::Local]));
    assert_eq!(parsed.parameters, crate::params(&["-v", "-h", "--bogus"]));
}

#[test]
fn terminator_absorption_preserves_the_configuration() {
    // O -- X Y parses to the same configuration as O with parameters {X, Y}
    let plain = crate::parse_ok(&["-v", "-e=local", "app", "other"]);
    let terminated = crate::parse_ok(&["-v", "-e=local", "--", "app", "other"]);
    assert_eq!(plain.config, terminated.config);
    assert_eq!(plain.parameters, terminated.parameters);
}

#[test]
fn terminator_alone_is_missing_environments() {
    assert_eq!(crate::parse(&["--"]), Err(ParseError::NoEnvironments));
}

#[test]
fn terminator_with_parameters_still_needs_an_environment() {
    assert_eq!(crate::parse(&["--", "app"]), Err(ParseError::NoEnvironments));
}

#[test]
fn options_after_terminator_need_an_environment_before_it() {
    // The -e after -- is a parameter, so no environment was configured
    assert_eq!(
        crate::parse(&["--", "-e=local", "app"]),
        Err(ParseError::NoEnvironments)
    );
}

#[test]
fn terminator_cannot_be_an_environment_value() {
    let err = crate::parse(&["--environment", "--", "local,test"]).unwrap_err();
    assert_eq!(err, ParseError::MissingValue("--environment".to_string()));
}

#[test]
fn terminator_cannot_be_a_verbosity_value() {
    // -- is not a count; -v defaults to 1 and -- then halts scanning
    let parsed = crate::parse_ok(&["-e=local", "-v", "--", "app"]);
    assert_eq!(parsed.config, crate::config(false, 1, &[Environment::Local]));
    assert_eq!(parsed.parameters, crate::params(&["app"]));
}

#[test]
fn second_terminator_is_a_parameter() {
    let parsed = crate::parse_ok(&["-e=local", "--", "--", "app"]);
    assert_eq!(parsed.parameters, crate::params(&["--", "app"]));
}
