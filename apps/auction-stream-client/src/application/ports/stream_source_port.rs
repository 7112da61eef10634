//! Stream Source Port (Driven Port)
//!
//! Interface for opening one server-streaming subscription. The supervisor
//! calls [`StreamSourcePort::open`] once per connection attempt.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::streaming::{StreamError, StreamKind};

/// Items of an open subscription. `None` means the server ended the stream.
pub type ItemStream<T> = BoxStream<'static, Result<T, StreamError>>;

/// Port for server-streaming subscriptions.
#[async_trait]
pub trait StreamSourcePort: Send + Sync + 'static {
    /// Response message carried by the stream.
    type Item: Send + 'static;

    /// Which subscription this source opens.
    fn kind(&self) -> StreamKind;

    /// Open a new subscription with fresh credentials.
    async fn open(&self) -> Result<ItemStream<Self::Item>, StreamError>;
}
