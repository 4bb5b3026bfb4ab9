//! Integration tests for manifest functionality
//!
//! These tests drive load, merge and write against files on disk.
