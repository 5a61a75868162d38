//! Utility functions for rule implementations.

pub mod camel_caps;

#[doc(inline)]
pub use camel_caps::{is_camel_case, CamelCaps};
