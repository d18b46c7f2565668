//! External system adapters

pub mod shopify;
