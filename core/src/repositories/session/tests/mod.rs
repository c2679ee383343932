//! Tests for the in-memory TTL store

#[cfg(test)]
mod memory_tests;
