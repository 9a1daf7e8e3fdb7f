//! Property-test run profile read from the environment.
//!
//! Every property suite in the workspace builds its proptest configuration
//! from [`ProptestRunProfile`], so one pair of variables tunes them all.

use std::env;

/// Environment variable overriding proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const VECPATH_PBT_FORK_ENV_KEY: &str = "VECPATH_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile, falling back to the given defaults when a variable is
    /// unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecpath_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(VECPATH_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether proptest cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
