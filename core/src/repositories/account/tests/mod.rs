//! Tests for the in-memory account store
