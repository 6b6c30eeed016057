//! # Sitewatch - field visit and operations analytics
//!
//! A command-line tool that turns spreadsheet exports of site-visit logs,
//! IT issue logs and ERP correction requests into performance reports.
//!
//! ## Features
//!
//! - **Employee Summary**: Logged visit time against daily targets, with
//!   month-over-month stability
//! - **Department Summary**: The same figures rolled up per department
//! - **Duty Analysis**: Day-by-day coverage of security supervisors
//! - **ERP Corrections**: Request status and resolution time per officer
//! - **IT Issues**: Issue occurrences merged into date intervals
//! - **Trend**: Achievement across a range of months
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sitewatch::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod import;
pub mod libs;
