//! Auction REST API client.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::AuctionApiError;
use crate::domain::auction::{
    Auction, Block, BlockList, BlockOrderPatchRequest, BlockOrderRequest, Curve, CurveOrder,
    CurveOrderPatchRequest, CurveOrderRequest, OrdersResponse, PortfolioVolumesResponse,
    PricesResponse, TradesSummary,
};
use crate::infrastructure::auth::AuthInjector;

/// Client for the auction REST API.
#[derive(Debug, Clone)]
pub struct AuctionApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthInjector,
}

impl AuctionApiClient {
    /// Create a client for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, auth: AuthInjector) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, auth)
    }

    /// Create a client with a preconfigured reqwest client.
    #[must_use]
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        auth: AuthInjector,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            auth,
        }
    }

    // =========================================================================
    // Auctions
    // =========================================================================

    /// List auctions closing for bidding within the given window.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn get_auctions(
        &self,
        close_bidding_from: DateTime<Utc>,
        close_bidding_to: DateTime<Utc>,
    ) -> Result<Vec<Auction>, AuctionApiError> {
        let query = [
            ("closeBiddingFrom", format_time(close_bidding_from)),
            ("closeBiddingTo", format_time(close_bidding_to)),
        ];
        self.fetch(self.request(Method::GET, "/auctions").query(&query))
            .await
    }

    /// Trades of an auction; only available once results are published.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn get_trades(
        &self,
        auction_id: &str,
        portfolios: &[&str],
        areas: &[&str],
    ) -> Result<Vec<TradesSummary>, AuctionApiError> {
        let path = format!("/auctions/{auction_id}/trades");
        self.fetch(
            self.request(Method::GET, &path)
                .query(&filters(portfolios, areas)),
        )
        .await
    }

    /// Curve and block orders of an auction.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn get_orders(
        &self,
        auction_id: &str,
        portfolios: &[&str],
        areas: &[&str],
    ) -> Result<OrdersResponse, AuctionApiError> {
        let path = format!("/auctions/{auction_id}/orders");
        self.fetch(
            self.request(Method::GET, &path)
                .query(&filters(portfolios, areas)),
        )
        .await
    }

    /// Prices of an auction.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn get_prices(&self, auction_id: &str) -> Result<PricesResponse, AuctionApiError> {
        let path = format!("/auctions/{auction_id}/prices");
        self.fetch(self.request(Method::GET, &path)).await
    }

    /// Portfolio net volumes of an auction.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn get_portfolio_volumes(
        &self,
        auction_id: &str,
        portfolios: &[&str],
        areas: &[&str],
    ) -> Result<PortfolioVolumesResponse, AuctionApiError> {
        let path = format!("/auctions/{auction_id}/portfoliovolumes");
        self.fetch(
            self.request(Method::GET, &path)
                .query(&filters(portfolios, areas)),
        )
        .await
    }

    // =========================================================================
    // Curve Orders
    // =========================================================================

    /// Place a curve order.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn place_curve_order(
        &self,
        order: &CurveOrderRequest,
    ) -> Result<CurveOrder, AuctionApiError> {
        self.fetch(self.request(Method::POST, "/curveorders").json(order))
            .await
    }

    /// Fetch a curve order.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn get_curve_order(&self, order_id: Uuid) -> Result<CurveOrder, AuctionApiError> {
        let path = format!("/curveorders/{order_id}");
        self.fetch(self.request(Method::GET, &path)).await
    }

    /// Replace the curves of an order.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn modify_curve_order(
        &self,
        order_id: Uuid,
        curves: Vec<Curve>,
    ) -> Result<(), AuctionApiError> {
        let path = format!("/curveorders/{order_id}");
        let body = CurveOrderPatchRequest { curves };
        self.execute(self.request(Method::PATCH, &path).json(&body))
            .await
            .map(drop)
    }

    /// Cancel a curve order by removing all its curves.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn cancel_curve_order(&self, order_id: Uuid) -> Result<(), AuctionApiError> {
        self.modify_curve_order(order_id, Vec::new()).await
    }

    // =========================================================================
    // Block Orders
    // =========================================================================

    /// Place a block order.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn place_block_order(
        &self,
        order: &BlockOrderRequest,
    ) -> Result<BlockList, AuctionApiError> {
        self.fetch(self.request(Method::POST, "/blockorders").json(order))
            .await
    }

    /// Fetch a block order.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn get_block_order(&self, order_id: Uuid) -> Result<BlockList, AuctionApiError> {
        let path = format!("/blockorders/{order_id}");
        self.fetch(self.request(Method::GET, &path)).await
    }

    /// Replace the blocks of an order.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn modify_block_order(
        &self,
        order_id: Uuid,
        blocks: Vec<Block>,
    ) -> Result<(), AuctionApiError> {
        let path = format!("/blockorders/{order_id}");
        let body = BlockOrderPatchRequest { blocks };
        self.execute(self.request(Method::PATCH, &path).json(&body))
            .await
            .map(drop)
    }

    /// Cancel a block order by removing all its blocks.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication, network or API failure.
    pub async fn cancel_block_order(&self, order_id: Uuid) -> Result<(), AuctionApiError> {
        self.modify_block_order(order_id, Vec::new()).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, AuctionApiError> {
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, AuctionApiError> {
        let response = self.auth.authorize_http(request).await?.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), url = %url, "Auction API request failed");
        Err(AuctionApiError::from_response(status, &body))
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Repeated `portfolios` / `areas` query parameters.
fn filters<'a>(portfolios: &[&'a str], areas: &[&'a str]) -> Vec<(&'static str, &'a str)> {
    portfolios
        .iter()
        .map(|p| ("portfolios", *p))
        .chain(areas.iter().map(|a| ("areas", *a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_repeat_keys() {
        assert_eq!(
            filters(&["P1", "P2"], &["FR"]),
            vec![("portfolios", "P1"), ("portfolios", "P2"), ("areas", "FR")]
        );
        assert!(filters(&[], &[]).is_empty());
    }

    #[test]
    fn times_are_rfc3339_utc() {
        let time = DateTime::from_timestamp(1_704_106_800, 0).unwrap();
        assert_eq!(format_time(time), "2024-01-01T11:00:00Z");
    }
}
