//! Anchored-position computation from design-frame coordinates.
//!
//! Converts an element's position and size in a top-left-origin, Y-down
//! design frame into an anchored position for a UI layout system with a
//! configurable anchor/pivot model and a Y-up axis. Pure geometry — no
//! host integration, no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`anchor`] — Anchor presets, the preset→point table, boundary parsing
//! - [`frame`] — Frame/element records and the coordinate transform

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod anchor;
pub mod frame;

pub use anchor::{AnchorPoint, AnchorPreset};
pub use frame::{Anchored, ElementRect, Frame, NodeLayout, Pivot, convert};
