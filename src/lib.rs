//! Punch-clock reconciliation engine
//!
//! This crate turns punch-clock records fetched from a workforce-management API
//! into payroll-usable facts: total worked time, missed clock-outs per employee
//! and the hour-of-day distribution of work.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reconciliation;
pub mod source;
