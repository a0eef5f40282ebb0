//! Wire DTOs for the governance API.
//!
//! # Design
//! These mirror the backend's schema and carry no behaviour. Fields the
//! server may omit are `Option`, lists default to empty, and names follow
//! the server's `camelCase` spelling. Request DTOs may leave filters unset;
//! the client strips empty fields before sending, so `None`, `""` and `[]`
//! all mean "no filter".

pub mod auth;
pub mod common;
pub mod compliance;
pub mod integration;
pub mod inventory;
pub mod metadata;
pub mod onboard;
pub mod schedule;
pub mod wastage;
pub mod workspace;

pub use common::{ConformanceStatus, ConnectorType, Page, SeverityLevel, SortDirection};
