//! Request guards.
//!
//! - [`api_key::require_api_key`] -- rejects requests without the public `apikey` header.
//! - [`auth::AuthUser`] -- extracts the authenticated actor from a JWT Bearer token.

pub mod api_key;
pub mod auth;
