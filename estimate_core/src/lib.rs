//! # estimate_core - Drywall Estimating Engine
//!
//! `estimate_core` is the computational heart of Boardline, turning
//! per-room geometry and a set of cost/rate settings into a material
//! takeoff and a priced quote. All inputs and outputs are
//! JSON-serializable, making it easy to drive from any front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a job snapshot and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Total arithmetic**: The pipeline never fails; divisions guard their
//!   denominators and subtractions clamp at zero
//! - **Rich Errors**: Structured error types at the file/validation boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::calculations::{compute, RoomSpec};
//! use estimate_core::job::Job;
//!
//! let mut job = Job::new("Pat Estimator", "26-104", "Northview Homes");
//! job.add_room(RoomSpec::new("Main Floor").with_dimensions(10.0, 10.0, 8.0));
//!
//! let estimate = compute(&job);
//! println!("{} sheets", estimate.takeoff.sheets);
//! ```
//!
//! ## Modules
//!
//! - [`job`] - Job container, metadata, and settings
//! - [`calculations`] - The estimating pipeline (geometry, channel, takeoff, high parts, pricing)
//! - [`catalog`] - Door, wall-height, sheet, and channel-spacing presets
//! - [`units`] - Type-safe unit wrappers
//! - [`export`] - CSV and plain-text summary formatting
//! - [`errors`] - Structured error types
//! - [`file_io`] - Job file operations with atomic saves

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod job;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, compute_estimate, Estimate};
pub use errors::{EstimateError, EstimateResult};
pub use file_io::{load_job, save_job};
pub use job::{EstimateSettings, Job, JobMetadata};
