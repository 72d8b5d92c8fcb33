//! HTTP handlers for all web routes.

pub mod page;
pub mod api;
pub mod update;
pub mod system;
