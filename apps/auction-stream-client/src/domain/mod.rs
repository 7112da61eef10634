//! Domain Layer - Core types with no transport dependencies.

/// Auction REST API payloads (auctions, orders, trades, prices).
pub mod auction;

/// Bearer credentials and the SSO credential request.
pub mod credential;

/// Stream kinds, failure classification and the retry policy.
pub mod streaming;
