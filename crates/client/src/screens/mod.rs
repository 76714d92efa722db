//! One view-model per main view.

pub mod dashboard;
pub mod plano_form;
pub mod plano_manager;
pub mod regionais;
pub mod responsaveis;
