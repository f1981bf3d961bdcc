//! Working Days Engine for payroll salary slips
//!
//! This crate reconciles an employee's working days for a pay period: it applies
//! a fixed working-days-per-month policy, caps the working days handed to leave
//! calculation, and counts the unmarked days that still need an attendance or
//! leave decision.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
