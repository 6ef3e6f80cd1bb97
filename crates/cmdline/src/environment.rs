// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment environment names.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// A deployment environment an application can be targeted at.
///
/// The set of names is closed: the variants below are the only values the
/// `-e`/`--env`/`--environment` option accepts, and [`Environment::ALL`]
/// enumerates them. Keeping the set here keeps the parsing predicate, the
/// error message, and the documentation in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Local,
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Every recognized environment, in canonical order.
    pub const ALL: [Environment; 5] = [
        Environment::Local,
        Environment::Development,
        Environment::Test,
        Environment::Staging,
        Environment::Production,
    ];

    /// The canonical lowercase name, as written on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "local" => Ok(Environment::Local),
            "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(ParseError::UnknownEnvironment(name.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
