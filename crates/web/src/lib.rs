//! Shopfront web library.
//!
//! This crate provides the storefront widget functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart_store;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod notify;
pub mod routes;
pub mod state;
