//! Windrose Core Types and Definitions
//!
//! This crate provides the foundational types used to describe a compass
//! rose as renderer-agnostic drawing instructions. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and rotation ([`geometry`] module)
//! - **Draw**: Primitives, placements, symbol templates, layers and styles ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
