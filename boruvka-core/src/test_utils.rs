//! Shared test utilities for `boruvka-core`.

use boruvka_test_support::property::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `BORUVKA_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Number of repeated runs used by concurrency properties.
#[must_use]
pub(crate) fn concurrency_repetitions() -> u32 {
    ProptestRunProfile::load(1, false).repetitions()
}
