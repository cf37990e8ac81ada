//! Newtype wrappers for prices and list ids.

pub mod id;
pub mod price;

pub use id::ListId;
pub use price::{Price, PriceError};
