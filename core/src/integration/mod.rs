//! Integration tests for the framekey input core
//!
//! Drives the poller end to end: platform events in, script-level queries
//! out, with configuration files and cross-thread rebinding in between.

#[cfg(test)]
mod config_tests;
