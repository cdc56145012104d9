//! ScholarWeave API
//!
//! A thin HTTP gateway over the OpenAlex bibliographic API. It proxies paper
//! search and lookup, and returns every work as a normalized [`models::Paper`].
//!
//! # Features
//!
//! - **Abstract reconstruction**: OpenAlex inverted indexes become plain text
//! - **Flexible ids**: bare, percent-encoded or full-URL work identifiers
//! - **One response shape**: search and lookup share the same normalization
//! - **Bounded upstream calls**: explicit request and connect timeouts
//!
//! # Example
//!
//! ```no_run
//! use scholarweave::{config::Config, server::GatewayServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     GatewayServer::new(config)?.run().await
//! }
//! ```

pub mod abstract_text;
pub mod client;
pub mod config;
pub mod error;
pub mod identifier;
pub mod models;
pub mod normalize;
pub mod server;
pub mod service;

pub use client::{OpenAlexClient, WorkSource};
pub use config::Config;
pub use error::{ApiError, ClientError};
pub use service::PaperService;
