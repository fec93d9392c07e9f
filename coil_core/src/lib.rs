//! # coil_core - Coil Slitting Calculation Engine
//!
//! `coil_core` is the computational heart of Coilcut, deriving the physical
//! properties of wound metal coils (weight, volume, unwound length) and
//! planning their sub-cuts, with a clean, LLM-friendly API. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use coil_core::calculations::coil::{calculate, CoilInput};
//! use coil_core::materials::Metal;
//!
//! let input = CoilInput {
//!     label: "C-1".to_string(),
//!     inner_radius_mm: 300.0,
//!     outer_radius_mm: 800.0,
//!     width_mm: 300.0,
//!     metal: Metal::Steel,
//!     thickness_mm: Some(3.0),
//! };
//!
//! let metrics = calculate(&input).unwrap();
//! println!("Coil weighs {:.1} kg", metrics.weight_kg);
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and settings
//! - [`calculations`] - Coil metrics and cut planning
//! - [`materials`] - Metal definitions and density database
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use project::{GlobalSettings, Project, ProjectMetadata};
