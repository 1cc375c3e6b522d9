//! # Domain Types
//!
//! Value objects shared by the argument and result structures.

pub mod value_objects;
