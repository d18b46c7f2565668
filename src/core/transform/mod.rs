//! Order flattening stage

pub mod normalize;

pub use normalize::OrderNormalizer;
