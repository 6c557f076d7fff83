//! Primitive Components
//!
//! Basic building blocks shared by pages.

pub mod button;
pub mod text_input;
