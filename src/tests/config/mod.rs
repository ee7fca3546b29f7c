//! Config module tests.

mod config_tests;
