//! Tests for the meal repository mock

#[cfg(test)]
mod mock_tests;
