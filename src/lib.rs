//! # linode-dns-provider
//!
//! A Linode DNS Manager adapter exposing provider-neutral zone record
//! management: list, create, upsert, and delete records in a zone without
//! touching Linode's wire types.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and musl targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use linode_dns_provider::{DnsProvider, LinodeProvider, Record, RecordData};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from a personal access token
//!     let provider = LinodeProvider::new("your-token".to_string());
//!
//!     // 2. Append a TXT record to the zone
//!     let records = vec![Record {
//!         name: "_acme-challenge".to_string(),
//!         ttl: Duration::from_secs(120),
//!         data: RecordData::Txt {
//!             text: "validation-token".to_string(),
//!         },
//!     }];
//!     let created = provider.append_records("example.com.", &records).await?;
//!     println!("created with id {:?}", created[0].id);
//!
//!     // 3. Clean up: the returned records carry the ids delete needs
//!     provider.delete_records("example.com.", &created).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`ProviderError`] with provider context attached.
//! Multi-record operations are sequential and fail fast; earlier items stay
//! committed when a later one fails. Use
//! [`is_expected()`](ProviderError::is_expected) to pick a log level, and
//! re-list the zone to learn the surviving state after a partial failure.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};
pub use providers::LinodeProvider;
pub use traits::DnsProvider;
pub use types::{Record, RecordData, ZoneRecord};
