//! Auction API Payloads
//!
//! JSON shapes exchanged with the auction REST API. Field names are camelCase
//! on the wire; amounts use `Decimal` and timestamps are UTC.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Lifecycle state of an auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionStateType {
    /// Accepting orders.
    Open,
    /// Closed for bidding.
    Closed,
    /// Results have been published.
    ResultsPublished,
    /// Auction was cancelled.
    Cancelled,
}

/// Order kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    /// Curve order.
    Curve,
    /// Block order.
    Block,
}

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    /// Buy side.
    Buy,
    /// Sell side.
    Sell,
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStateType {
    /// Newly placed.
    New,
    /// Accepted by the auction.
    Accepted,
    /// Cancelled.
    Cancelled,
    /// Accepted by the user.
    UserAccepted,
    /// Results published.
    ResultsPublished,
    /// No state reported.
    None,
}

// =============================================================================
// Auctions & Portfolios
// =============================================================================

/// An auction with its contracts and the caller's portfolios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    /// Auction id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current state.
    pub state: AuctionStateType,
    /// Close-for-bidding time.
    pub close_for_bidding: DateTime<Utc>,
    /// Delivery period start.
    pub delivery_start: DateTime<Utc>,
    /// Delivery period end.
    pub delivery_end: DateTime<Utc>,
    /// Tradable contracts.
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// Accepted currencies.
    #[serde(default)]
    pub currencies: Vec<Currency>,
    /// Portfolios the caller may trade with.
    #[serde(default)]
    pub portfolios: Vec<Portfolio>,
}

/// A delivery contract of an auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Contract id.
    pub id: String,
    /// Delivery start.
    pub delivery_start: DateTime<Utc>,
    /// Delivery end.
    pub delivery_end: DateTime<Utc>,
}

/// Currency accepted by an auction with its price limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// ISO currency code.
    pub currency_code: String,
    /// Minimum allowed price.
    pub min_price: Decimal,
    /// Maximum allowed price.
    pub max_price: Decimal,
}

/// A trading portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Portfolio name.
    pub name: String,
    /// Portfolio id.
    pub id: String,
    /// Portfolio currency.
    pub currency: String,
    /// Owning company id.
    pub company_id: String,
    /// Owning company name.
    pub company_name: String,
    /// Delivery areas.
    #[serde(default)]
    pub areas: Vec<PortfolioArea>,
}

/// A delivery area of a portfolio with its curve volume limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioArea {
    /// Area code.
    pub code: String,
    /// Area name.
    pub name: String,
    /// EIC code.
    pub eic_code: String,
    /// Minimum curve volume.
    pub curve_min_volume_limit: Decimal,
    /// Maximum curve volume.
    pub curve_max_volume_limit: Decimal,
}

// =============================================================================
// Curve Orders
// =============================================================================

/// A price/volume point of a curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Price.
    pub price: Decimal,
    /// Volume.
    pub volume: Decimal,
}

/// A bid curve for one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curve {
    /// Contract the curve applies to.
    pub contract_id: String,
    /// Curve points.
    pub curve_points: Vec<CurvePoint>,
}

/// Request body for placing a curve order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveOrderRequest {
    /// Target auction.
    pub auction_id: String,
    /// Portfolio to trade with.
    pub portfolio: String,
    /// Delivery area.
    pub area_code: String,
    /// Free-form comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Curves to place.
    pub curves: Vec<Curve>,
}

/// A placed curve order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveOrder {
    /// Order id.
    pub order_id: Uuid,
    /// Delivery area.
    pub area_code: String,
    /// Portfolio.
    pub portfolio: String,
    /// Currency.
    pub currency_code: String,
    /// Auction id.
    pub auction_id: String,
    /// Last modifier.
    pub modifier: String,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    /// Order state.
    pub state: OrderStateType,
    /// Curves.
    #[serde(default)]
    pub curves: Vec<Curve>,
    /// Comment.
    pub comment: Option<String>,
}

/// Patch body replacing the curves of an order; empty cancels the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveOrderPatchRequest {
    /// Replacement curves.
    pub curves: Vec<Curve>,
}

// =============================================================================
// Block Orders
// =============================================================================

/// Volume of a block for one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Contract id.
    pub contract_id: String,
    /// Volume.
    pub volume: Decimal,
}

/// A block bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block name.
    pub name: String,
    /// Block price.
    pub price: Decimal,
    /// Minimum acceptance ratio.
    pub minimum_acceptance_ratio: Decimal,
    /// Parent block this block is linked to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_to: Option<String>,
    /// Exclusive group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_group: Option<String>,
    /// Volumes per contract.
    pub periods: Vec<Period>,
    /// Whether this is a spread block.
    #[serde(default)]
    pub is_spread_block: bool,
    /// Last modifier (set by the server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    /// Block state (set by the server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderStateType>,
}

impl Block {
    /// A linked block references a parent and is not a spread block.
    #[must_use]
    pub fn is_linked_block(&self) -> bool {
        self.linked_to.as_deref().is_some_and(|s| !s.is_empty()) && !self.is_spread_block
    }

    /// Check if the block belongs to an exclusive group.
    #[must_use]
    pub fn is_exclusive_group(&self) -> bool {
        self.exclusive_group.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// A profiled block has differing volumes across its periods.
    #[must_use]
    pub fn is_profiled_block(&self) -> bool {
        self.periods
            .first()
            .is_some_and(|first| self.periods.iter().any(|p| p.volume != first.volume))
    }
}

/// Request body for placing a block order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockOrderRequest {
    /// Target auction.
    pub auction_id: String,
    /// Portfolio to trade with.
    pub portfolio: String,
    /// Delivery area.
    pub area_code: String,
    /// Free-form comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Blocks to place.
    pub blocks: Vec<Block>,
}

/// A placed block order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockList {
    /// Order id.
    pub order_id: Uuid,
    /// Delivery area.
    pub area_code: String,
    /// Portfolio.
    pub portfolio: String,
    /// Auction id.
    pub auction_id: String,
    /// Last modifier.
    pub modifier: String,
    /// Currency.
    pub currency_code: String,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    /// Blocks.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Comment.
    pub comment: Option<String>,
}

/// Patch body replacing the blocks of an order; empty cancels the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockOrderPatchRequest {
    /// Replacement blocks.
    pub blocks: Vec<Block>,
}

/// All orders of an auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    /// Curve orders.
    #[serde(default)]
    pub curve_orders: Vec<CurveOrder>,
    /// Block orders.
    #[serde(default)]
    pub block_lists: Vec<BlockList>,
}

// =============================================================================
// Trades, Prices & Volumes
// =============================================================================

/// A single trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade id.
    pub trade_id: String,
    /// Contract id.
    pub contract_id: String,
    /// Delivery start.
    pub delivery_start: DateTime<Utc>,
    /// Delivery end.
    pub delivery_end: DateTime<Utc>,
    /// Traded volume.
    pub volume: Decimal,
    /// Trade price.
    pub price: Decimal,
    /// Side.
    pub side: TradeSide,
}

/// Trades of one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesSummary {
    /// Delivery area.
    pub area_code: String,
    /// Auction id.
    pub auction_id: String,
    /// Order id.
    pub order_id: String,
    /// Portfolio.
    pub portfolio: String,
    /// Currency.
    pub currency_code: String,
    /// User that placed the order.
    pub user_id: String,
    /// Order kind.
    pub order_type: OrderType,
    /// Trades.
    #[serde(default)]
    pub trades: Vec<Trade>,
}

/// Market price of one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPrice {
    /// Area code.
    pub area_code: String,
    /// Market clearing price, absent until published.
    pub market_price: Option<Decimal>,
    /// Price status.
    pub status: String,
}

/// Prices of one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPrice {
    /// Contract id.
    pub contract_id: String,
    /// Delivery start.
    pub delivery_start: DateTime<Utc>,
    /// Delivery end.
    pub delivery_end: DateTime<Utc>,
    /// Area prices.
    #[serde(default)]
    pub areas: Vec<AreaPrice>,
}

/// Prices of an auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesResponse {
    /// Auction id.
    pub auction: String,
    /// Delivery start.
    pub auction_delivery_start: DateTime<Utc>,
    /// Delivery end.
    pub auction_delivery_end: DateTime<Utc>,
    /// Contract prices.
    #[serde(default)]
    pub contracts: Vec<ContractPrice>,
}

/// Net volume of one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractVolume {
    /// Contract id.
    pub contract_id: String,
    /// Net volume.
    pub net_volume: Decimal,
}

/// Net volumes of a portfolio in one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioVolume {
    /// Portfolio.
    pub portfolio: String,
    /// Area code.
    pub area_code: String,
    /// Volumes per contract.
    #[serde(default)]
    pub contracts: Vec<ContractVolume>,
}

/// Portfolio net volumes of an auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioVolumesResponse {
    /// Auction id.
    pub auction_id: String,
    /// Volumes per portfolio and area.
    #[serde(default)]
    pub portfolio_net_volumes: Vec<PortfolioVolume>,
}
