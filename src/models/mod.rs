//! Data models for keyboard layouts.
//!
//! This module contains the canonical layout representation that every
//! converter reads from. Models are independent of file I/O and CLI logic.

pub mod finger;
pub mod key;
pub mod layout;
pub mod timestamp;

// Re-export all model types
pub use finger::{Finger, Hand};
pub use key::Key;
pub use layout::Layout;
