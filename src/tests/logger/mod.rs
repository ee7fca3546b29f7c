//! Logger module tests.
