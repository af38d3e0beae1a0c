//! Business logic services for the Consignment Inventory Platform

pub mod auth;
pub mod distribution;
pub mod product;
pub mod report;
pub mod sales;
pub mod stock;
pub mod store;
pub mod user;

pub use auth::AuthService;
pub use distribution::DistributionService;
pub use product::ProductService;
pub use report::ReportService;
pub use sales::SalesService;
pub use stock::StockLedger;
pub use store::StoreService;
pub use user::UserService;
