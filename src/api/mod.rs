//! Sparkle API resource client
//!
//! Fetches tenant-scoped collections (instances, clusters) from the Sparkle
//! REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use rainbow::api::{ResourceClient, ResourceKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ResourceClient::with_url("http://localhost:9860")?;
//!
//!     let instances = client.fetch(ResourceKind::Instance, "acme").await?;
//!     for (id, instance) in &instances {
//!         println!("{}: {}", id, instance);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::ResourceClient;
pub use error::{ApiError, Result};
pub use types::{Collection, Entity, ResourceKind};
