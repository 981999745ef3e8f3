//! # ecoDMS API Client
//!
//! A typed Rust client for the ecoDMS document management REST API.
//!
//! ## Features
//!
//! - Validated configuration with descriptive errors before any network I/O
//! - One authenticated HTTP session per client, safe for concurrent calls
//! - Streaming multipart uploads for documents and PDF renditions
//! - Explicit error taxonomy separating transport failures from server
//!   rejections
//!
//! ## Example
//!
//! ```no_run
//! use ecodms_api::api::{ConnectionApi, FolderApi};
//! use ecodms_api::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://ecodms.local", "ecodms", "ecodms");
//!     let client = Client::new(config)?;
//!
//!     // Verify connectivity and credentials
//!     println!("{}", client.test().await?);
//!
//!     for folder in client.get_folders().await? {
//!         println!("{folder}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{Client, RequestOptions};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, ConfigError};
