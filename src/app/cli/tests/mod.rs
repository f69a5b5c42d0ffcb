//! Tests for the CLI module

pub mod display_tests;
