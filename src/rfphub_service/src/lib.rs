//! Router assembly and server runner for the marketplace access-control
//! service.

pub mod market_service;
pub mod tracing;

pub use market_service::MarketService;
pub use tracing::init_tracing;
