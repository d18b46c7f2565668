// shopsync - Shopify to OMS Order Sync
// Copyright (c) 2025 shopsync Contributors
// Licensed under the MIT License

//! # shopsync - Shopify to OMS order sync
//!
//! shopsync is an incremental sync tool that pulls paid orders from a
//! Shopify shop and turns them into a pair of CSV files per run: a
//! full-fidelity archive file and a fixed-column import file for the
//! downstream order management system (OMS).
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** one page of paid orders past the persisted cursor
//! - **Flattening** orders into one record per (order, line item) pair
//! - **Pricing** records: discount proration, per-order cart subtotals,
//!   and discount-code resolution into effective unit prices
//! - **Projecting** records into the archive and OMS import shapes
//! - **Advancing** the `(last_order_id, last_document_seq)` cursor only
//!   after the output files are on disk
//!
//! ## Architecture
//!
//! shopsync follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pipeline stages (state, transform, pricing, project,
//!   output, sync)
//! - [`adapters`] - External integrations (Shopify Admin API)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopsync::config::load_config;
//! use shopsync::core::sync::SyncCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("shopsync.toml")?;
//!
//!     let coordinator = SyncCoordinator::from_config(&config)?;
//!     let summary = coordinator.run().await?;
//!
//!     println!("Processed {} orders", summary.orders_fetched);
//!     Ok(())
//! }
//! ```
//!
//! ## Incremental Sync
//!
//! The cursor file holds `last_order_id,last_document_seq`. Each run
//! fetches orders with `since_id` past the cursor; an empty page is a
//! clean no-op. Because a run takes at most one page, a backlog larger
//! than the page size is caught up by running again; scheduled runs
//! converge on the head of the order stream.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
