//! radrisk-common — Domain types, risk models, and errors shared across radrisk crates.

pub mod error;
pub mod sources;
pub mod models;
pub mod calculator;

// Re-export commonly used types
pub use calculator::{estimate, format_estimate, CalculatorInput};
pub use models::{dose_range, generate_curves, CurveSet, DoseSample, HormesisVariant, RiskModel};
pub use sources::{RadiationSource, RADIATION_SOURCES};
