//! Shared configuration for property-based domain tests.

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 48,
        ..ProptestConfig::default()
    }
}
