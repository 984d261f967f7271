//! Allocation-backed types shared by every module.
//!
//! `alloc` is always linked, so these resolve to the same items whether or not
//! the `std` feature is enabled.

pub use alloc::format;
pub use alloc::string::{String, ToString};
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;
