// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuctionStatus {
    #[prost(string, tag = "1")]
    pub auction_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub auction_name: ::prost::alloc::string::String,
    #[prost(enumeration = "AuctionState", tag = "3")]
    pub state: i32,
    #[prost(message, optional, tag = "4")]
    pub updated_at: ::core::option::Option<::prost_types::Timestamp>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuctionStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub auction_status: ::core::option::Option<AuctionStatus>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidatedCurve {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub time_step: i32,
    #[prost(string, tag = "3")]
    pub contract_id: ::prost::alloc::string::String,
    #[prost(bool, tag = "4")]
    pub is_valid: bool,
    #[prost(string, tag = "5")]
    pub validation_message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReasonabilityResultsInfo {
    #[prost(string, tag = "1")]
    pub portfolio: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub area: ::prost::alloc::string::String,
    #[prost(enumeration = "OrderApprovalState", tag = "3")]
    pub order_approval_state: i32,
    #[prost(message, repeated, tag = "4")]
    pub curves: ::prost::alloc::vec::Vec<ValidatedCurve>,
    #[prost(string, tag = "5")]
    pub reference_day: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub auction_id: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub order_id: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub approval_modifier: ::prost::alloc::string::String,
    #[prost(enumeration = "ApprovalSource", tag = "9")]
    pub approval_source: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReasonabilityResultsResponse {
    #[prost(message, optional, tag = "1")]
    pub reasonability_results_info: ::core::option::Option<ReasonabilityResultsInfo>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AuctionState {
    Unspecified = 0,
    Open = 1,
    Closed = 2,
    ResultsPublished = 3,
    Cancelled = 4,
}
impl AuctionState {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "AUCTION_STATE_UNSPECIFIED",
            Self::Open => "AUCTION_STATE_OPEN",
            Self::Closed => "AUCTION_STATE_CLOSED",
            Self::ResultsPublished => "AUCTION_STATE_RESULTS_PUBLISHED",
            Self::Cancelled => "AUCTION_STATE_CANCELLED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "AUCTION_STATE_UNSPECIFIED" => Some(Self::Unspecified),
            "AUCTION_STATE_OPEN" => Some(Self::Open),
            "AUCTION_STATE_CLOSED" => Some(Self::Closed),
            "AUCTION_STATE_RESULTS_PUBLISHED" => Some(Self::ResultsPublished),
            "AUCTION_STATE_CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderApprovalState {
    Undefined = 0,
    Approved = 1,
    NotApproved = 2,
}
impl OrderApprovalState {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Undefined => "ORDER_APPROVAL_STATE_UNDEFINED",
            Self::Approved => "ORDER_APPROVAL_STATE_APPROVED",
            Self::NotApproved => "ORDER_APPROVAL_STATE_NOT_APPROVED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ORDER_APPROVAL_STATE_UNDEFINED" => Some(Self::Undefined),
            "ORDER_APPROVAL_STATE_APPROVED" => Some(Self::Approved),
            "ORDER_APPROVAL_STATE_NOT_APPROVED" => Some(Self::NotApproved),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ApprovalSource {
    Automatic = 0,
    Operator = 1,
    Member = 2,
}
impl ApprovalSource {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Automatic => "APPROVAL_SOURCE_AUTOMATIC",
            Self::Operator => "APPROVAL_SOURCE_OPERATOR",
            Self::Member => "APPROVAL_SOURCE_MEMBER",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "APPROVAL_SOURCE_AUTOMATIC" => Some(Self::Automatic),
            "APPROVAL_SOURCE_OPERATOR" => Some(Self::Operator),
            "APPROVAL_SOURCE_MEMBER" => Some(Self::Member),
            _ => None,
        }
    }
}
/// Generated client implementations.
pub mod auction_notifier_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /** AuctionNotifier pushes auction state transitions to subscribed clients.
*/
    #[derive(Debug, Clone)]
    pub struct AuctionNotifierClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl AuctionNotifierClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> AuctionNotifierClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /** Stream auction status updates until the client or server ends the call.
*/
        pub async fn get_auction_status_stream(
            &mut self,
            request: impl tonic::IntoRequest<()>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::AuctionStatusResponse>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/auction.v1.AuctionNotifier/GetAuctionStatusStream",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("auction.v1.AuctionNotifier", "GetAuctionStatusStream"),
                );
            self.inner.server_streaming(req, path, codec).await
        }
    }
}
/// Generated client implementations.
pub mod reasonability_results_notifier_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /** ReasonabilityResultsNotifier pushes order reasonability check outcomes.
*/
    #[derive(Debug, Clone)]
    pub struct ReasonabilityResultsNotifierClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl ReasonabilityResultsNotifierClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> ReasonabilityResultsNotifierClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /** Stream reasonability check results until the client or server ends the call.
*/
        pub async fn get_reasonability_results_stream(
            &mut self,
            request: impl tonic::IntoRequest<()>,
        ) -> std::result::Result<
            tonic::Response<
                tonic::codec::Streaming<super::ReasonabilityResultsResponse>,
            >,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/auction.v1.ReasonabilityResultsNotifier/GetReasonabilityResultsStream",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "auction.v1.ReasonabilityResultsNotifier",
                        "GetReasonabilityResultsStream",
                    ),
                );
            self.inner.server_streaming(req, path, codec).await
        }
    }
}
