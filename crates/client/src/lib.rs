//! View-model layer of the Plano Anual de Segurança application.
//!
//! Every screen is a plain state machine driven through `&mut self` methods
//! and backed by an explicitly passed [`store::PlanStore`]. Rendering is left
//! to whatever front end owns these types.

pub mod auth_gate;
pub mod config;
pub mod confirm;
pub mod connectivity;
pub mod error;
pub mod guard;
pub mod records;
pub mod screens;
pub mod store;
