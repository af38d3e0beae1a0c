//! HTTP handlers for the Consignment Inventory Platform

pub mod auth;
pub mod distribution;
pub mod health;
pub mod product;
pub mod report;
pub mod sales;
pub mod stock;
pub mod store;
pub mod user;

pub use auth::*;
pub use distribution::*;
pub use health::*;
pub use product::*;
pub use report::*;
pub use sales::*;
pub use stock::*;
pub use store::*;
pub use user::*;
