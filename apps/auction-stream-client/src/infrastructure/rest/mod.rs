//! Auction REST API Adapter
//!
//! Authenticated reqwest client for auctions, orders, trades, prices and
//! portfolio volumes. Every call is authorized through the
//! [`AuthInjector`](crate::infrastructure::auth::AuthInjector).

mod client;
mod error;

pub use client::AuctionApiClient;
pub use error::AuctionApiError;
