//! Property-based tests for listing and selection

mod listing;
