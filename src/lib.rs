//! Reading Companion - a 288-day reading plan service
//!
//! This crate splits a fixed 66-group, 1,189-chapter corpus into a day-by-day
//! schedule, places it on a six-days-on, one-day-off calendar, and tracks
//! readers' progress through it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
