pub mod health_service;
pub mod wallet_connector;

pub use health_service::*;
pub use wallet_connector::*;
