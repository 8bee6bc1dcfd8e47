#![cfg_attr(not(test), no_std)]

//! # greenhouse-rs
//! ## Threshold control for a small greenhouse
//!
//! Features:
//! - Frost alarm and heater indicator
//! - Vent servo for over-temperature
//! - Grow light relay for low light
//! - Water pump for dry soil
//! - 16x2 LCD status screen

pub mod actuators;
pub mod control;
pub mod controller;
pub mod diagnostics;
pub mod formatting;
pub mod rendering;
pub mod sensors;
pub mod thresholds;
pub mod timer;
