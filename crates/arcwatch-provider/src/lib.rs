//! Schedule source: HTTP fetch, shape dispatch, classification entry point

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod source;

pub use client::ScheduleClient;
pub use config::{DEFAULT_FETCH_TIMEOUT, DEFAULT_SCHEDULE_URL, ScheduleConfig};
pub use dispatch::dispatch;
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use source::{BoxFuture, ErrorSource, EventSource, MetaforgeSource, StaticSource};
