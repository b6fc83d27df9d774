//! Property-test run profile shared by every proptest suite.
//!
//! CI raises the case count through `PROGTEST_CASES` and can switch on
//! forking through `ROADNET_PBT_FORK`. Malformed overrides are logged and
//! ignored so a typo never silently disables a suite.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const ROADNET_PBT_FORK_ENV_KEY: &str = "ROADNET_PBT_FORK";

/// Reasons an override value is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileOverrideError {
    /// The case count is not a positive integer.
    #[error("`{raw}` is not a positive case count")]
    InvalidCases {
        /// The rejected value.
        raw: String,
    },
    /// The fork switch is not a recognised boolean.
    #[error("`{raw}` is not a switch; expected true/false, 1/0, yes/no or on/off")]
    InvalidSwitch {
        /// The rejected value.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadnet_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_cases, default_fork)
    }

    /// Loads a profile through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// ```
    /// use roadnet_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(
    ///     |key| (key == "PROGTEST_CASES").then(|| "500".to_owned()),
    ///     64,
    ///     false,
    /// );
    /// assert_eq!(profile.cases(), 500);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup<F>(lookup: F, default_cases: u32, default_fork: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: resolve(&lookup, PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(&lookup, ROADNET_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest runs cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T, L, P>(lookup: &L, key: &'static str, default: T, parse: P) -> T
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, ProfileOverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|cases| *cases > 0)
        .ok_or_else(|| ProfileOverrideError::InvalidCases {
            raw: raw.to_owned(),
        })
}

fn parse_switch(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::InvalidSwitch {
            raw: raw.to_owned(),
        }),
    }
}
