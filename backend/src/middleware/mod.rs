//! Middleware for the Consignment Inventory Platform

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
