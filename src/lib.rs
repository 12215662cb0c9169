//! Prop-Firm Challenge Operations Desk
//!
//! Client-side business layer for a trading-challenge platform.
//!
//! ## Architecture
//!
//! ```text
//! ConfigSource (REST) → PricingResolver → tier tables
//! Template + MergeContext → TemplateResolver → rendered notification
//! Operator → BreachWorkflowCoordinator → breach-check / terminate (REST)
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod pricing;
pub mod template;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod config_tests;
