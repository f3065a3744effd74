//! # payriff - Payriff payment gateway client
//!
//! A Rust client for the Payriff payment gateway. Each gateway endpoint
//! (create order, order info, refund, complete, auto-pay) is one async method
//! on [`Client`] taking a typed request and returning the decoded
//! [`ApiResponse`] envelope.
//!
//! ```no_run
//! use payriff::{Client, Config, CreateOrderRequest, Operation};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> payriff::Result<()> {
//! let client = Client::new(Config::from_env())?;
//! let request = CreateOrderRequest::new(Decimal::new(1099, 2), "Order #1", Operation::Purchase);
//! let response = client.create_order(request).await?;
//!
//! if response.is_successful() {
//!     if let Some(order) = response.payload {
//!         println!("redirect to {}", order.payment_url);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
mod dispatch;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::Client;
pub use config::{Config, ResolvedConfig};
pub use error::{PayriffError, Result};
pub use types::*;

/// Current version of the payriff library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
