//! radrisk-web — Web front end for radrisk
//! Serves a single page with:
//!   - Dose comparison chart for common radiation sources
//!   - LNT / threshold / hormesis dose-response curves
//!   - Flight and chest X-ray dose calculator
//! plus a small JSON API over the same functions.

pub mod router;
pub mod handlers;
pub mod state;
pub mod callbacks;
pub mod chart;
pub mod view;
