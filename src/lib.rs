//! # Early Bird
//!
//! Ordering core for a breakfast delivery service: customer number login,
//! a small fixed catalog, order totals, and reusable order blueprints.
//!
//! The [`session::Session`] holds all mutable state. In an application it
//! runs inside a [`app_system::SessionService`] actor and is driven through
//! a cloneable [`clients::SessionClient`]:
//!
//! ```no_run
//! # async fn demo() -> Result<(), early_bird::error::SessionError> {
//! use early_bird::app_system::SessionSystem;
//! use early_bird::config::AppConfig;
//! use early_bird::domain::ProductId;
//!
//! let system = SessionSystem::start(&AppConfig::default());
//! system.client.login("38429730".to_string()).await?;
//! system.client.select_product(ProductId(1)).await?;
//! let summary = system.client.proceed_to_checkout().await?;
//! println!("{}", summary.totals.total_price);
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod blueprint;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod identity;
pub mod messages;
pub mod order;
pub mod session;

#[cfg(test)]
mod integration_tests;
