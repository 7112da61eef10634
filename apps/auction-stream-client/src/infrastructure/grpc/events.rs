//! Driver-facing stream payloads.

use std::fmt;

use chrono::{DateTime, Utc};

use super::proto::auction::v1::{
    ApprovalSource, AuctionState, AuctionStatus, OrderApprovalState, ReasonabilityResultsInfo,
};

/// Payload forwarded to the driver by either notification stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// An auction changed state.
    AuctionStatus(AuctionStatus),
    /// An order finished its reasonability check.
    ReasonabilityResults(ReasonabilityResultsInfo),
}

fn timestamp(ts: Option<&prost_types::Timestamp>) -> Option<DateTime<Utc>> {
    let ts = ts?;
    DateTime::from_timestamp(ts.seconds, u32::try_from(ts.nanos).unwrap_or(0))
}

impl fmt::Display for StreamEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuctionStatus(status) => {
                let state = AuctionState::try_from(status.state)
                    .map_or("UNKNOWN", |s| s.as_str_name());
                write!(
                    f,
                    "Auction {} ({}) is now {state}",
                    status.auction_name, status.auction_id
                )?;
                if let Some(at) = timestamp(status.updated_at.as_ref()) {
                    write!(f, " at {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?;
                }
                Ok(())
            }
            Self::ReasonabilityResults(info) => {
                let approval = OrderApprovalState::try_from(info.order_approval_state)
                    .map_or("UNKNOWN", |s| s.as_str_name());
                let source = ApprovalSource::try_from(info.approval_source)
                    .map_or("UNKNOWN", |s| s.as_str_name());
                write!(
                    f,
                    "Order {} in auction {} ({} / {}): {approval} by {source}",
                    info.order_id, info.auction_id, info.portfolio, info.area
                )?;
                let invalid: Vec<_> = info.curves.iter().filter(|c| !c.is_valid).collect();
                if !invalid.is_empty() {
                    write!(f, ", {} invalid curve(s)", invalid.len())?;
                    for curve in invalid {
                        write!(
                            f,
                            "\n    contract {} step {}: {}",
                            curve.contract_id, curve.time_step, curve.validation_message
                        )?;
                    }
                }
                Ok(())
            }
        }
    }
}
