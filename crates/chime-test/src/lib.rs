//! CHIME Test Harness - scenario simulation for the clock engine
//!
//! This crate provides:
//! - A simulated device with a hand-driven clock and button timeline
//! - End-to-end scenario tests for the sync protocol and alarm matching

pub mod simulator;

pub use simulator::*;

#[cfg(test)]
mod integration;
