//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Foreign-key violations are
//! returned untouched as `sqlx::Error::Database` (SQLSTATE `23503`); the
//! HTTP layer turns them into "dependent records exist" responses.

pub mod plano_anual_repo;
pub mod regional_repo;
pub mod responsavel_repo;
pub mod session_repo;
pub mod user_repo;

pub use plano_anual_repo::PlanoAnualRepo;
pub use regional_repo::RegionalRepo;
pub use responsavel_repo::ResponsavelRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
