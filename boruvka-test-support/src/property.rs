//! Environment-driven tuning for property suites.
//!
//! Every boruvka property suite reads the same variables so CI can scale all
//! of them from one place.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const BORUVKA_PBT_FORK_ENV_KEY: &str = "BORUVKA_PBT_FORK";
/// Environment variable controlling how often concurrency properties repeat a
/// run on the same input.
pub const BORUVKA_PBT_REPETITIONS_ENV_KEY: &str = "BORUVKA_PBT_REPETITIONS";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    repetitions: u32,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use boruvka_test_support::property::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.repetitions() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_env_or_default(PROGTEST_CASES_ENV_KEY, default_cases, parse_positive),
            fork: read_env_or_default(BORUVKA_PBT_FORK_ENV_KEY, default_fork, parse_bool),
            repetitions: read_env_or_default(BORUVKA_PBT_REPETITIONS_ENV_KEY, 3, parse_positive),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }

    /// Number of repeated runs per input for concurrency properties.
    #[must_use]
    #[rustfmt::skip]
    pub const fn repetitions(&self) -> u32 { self.repetitions }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("value must be > 0".to_owned()),
        Ok(value) => Ok(value),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
