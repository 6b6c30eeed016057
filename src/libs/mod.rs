//! Core library modules for sitewatch.
//!
//! ## Layout
//!
//! - **Records**: `visit`, `issue`, `correction`, parsed from CSV by
//!   [`crate::import`]
//! - **Calculation**: `formatter`, `rules`, `period`, `working_days`,
//!   `aggregate`, `stability`, `ordering`, `timeline`, `context`
//! - **Reports**: `summary`, `departments`, `duty`, `erp`, `it_analysis`,
//!   `trend`, all rendered through the `table` column model
//! - **Infrastructure**: `config`, `data_storage`, `messages`, `view`,
//!   `export`
//!
//! ## Usage
//!
//! ```rust
//! use sitewatch::libs::context::AnalyticsContext;
//! use sitewatch::libs::period::{Period, YearMonth};
//! use sitewatch::libs::summary::build_employee_summary;
//! use sitewatch::libs::visit::VisitRecord;
//! use sitewatch::libs::working_days::WorkingDays;
//!
//! let visits = vec![VisitRecord::new("2024-09-02", "Rahim", "Construction", "Site Engineer", "Tower A", "1:00:00")];
//! let month = Period::Month(YearMonth::new(2024, 9).unwrap());
//! let ctx = AnalyticsContext::new(WorkingDays::new(22));
//! let rows = build_employee_summary(&visits, &month, &month.previous(), &ctx);
//! assert_eq!(rows[0].current.actual_seconds, 3600);
//! ```

pub mod aggregate;
pub mod config;
pub mod context;
pub mod correction;
pub mod data_storage;
pub mod departments;
pub mod duty;
pub mod erp;
pub mod export;
pub mod formatter;
pub mod issue;
pub mod it_analysis;
pub mod messages;
pub mod ordering;
pub mod period;
pub mod rules;
pub mod stability;
pub mod summary;
pub mod table;
pub mod timeline;
pub mod trend;
pub mod view;
pub mod visit;
pub mod working_days;
