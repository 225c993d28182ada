//! Integration tests for the sprig CLI
//!
//! These tests run the sprig binary and verify observable behavior:
//! output shapes, determinism, and exit codes.

mod info;
mod misc;
mod mst;
