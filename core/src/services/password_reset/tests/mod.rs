//! Tests for the password reset flow

#[cfg(test)]
mod flow_tests;
