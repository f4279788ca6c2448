//! Environment-driven knobs that CI uses to scale test suites.

pub mod property_test_profile;
