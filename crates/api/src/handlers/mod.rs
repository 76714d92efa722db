pub mod auth;
pub mod dashboard;
pub mod plano_anual;
pub mod regionais;
pub mod responsaveis;
