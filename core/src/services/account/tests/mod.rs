//! Tests for the account lifecycle service

#[cfg(test)]
mod service_tests;
