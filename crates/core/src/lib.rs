//! Shopfront Core - Shared types library.
//!
//! This crate provides the domain types used by the Shopfront components:
//! - `web` - Server-rendered storefront widget
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no session access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and money formatting
//! - [`cart`] - Cart and line-item domain model
//! - [`pricing`] - Sale-price and discount math for product display

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod pricing;
pub mod types;

pub use cart::{Cart, LineItem};
pub use types::*;
