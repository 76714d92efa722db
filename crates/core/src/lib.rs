//! Domain logic for the annual security plan.
//!
//! This crate holds no database or HTTP dependencies. Storage lives in
//! `plano-db`, the HTTP surface in `plano-api` and the per-screen view state
//! in `plano-client`; all of them share the types and rules defined here.

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod messages;
pub mod payload;
pub mod status;
pub mod types;
pub mod validation;
