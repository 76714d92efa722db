//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row. Write bodies for the three resources live in
//! `plano_core::payload` because the view-models build them too.

pub mod plano_anual;
pub mod regional;
pub mod responsavel;
pub mod session;
pub mod user;
