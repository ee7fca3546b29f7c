//! Sink module tests.

mod uppercase_tests;
