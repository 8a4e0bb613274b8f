//! Top-level test module for quickcsv
//!
//! This file organizes all integration tests into categories.

mod cli;
mod helpers;
mod table;
