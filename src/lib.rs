//! SolarTrace - Terminal dashboard for AS7341 spectral light sensors
//!
//! This library exposes the core modules for testing and reuse.

pub mod app;
pub mod backend;
pub mod charts;
pub mod common;
pub mod config;
pub mod display;
pub mod error;
pub mod ui;
pub mod view;
