// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for navpoint crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake (the `localStorage` stand-in)
//! - [`fixtures`] - Place, segment and viewport builders
//! - [`model`] - Map model wrapper with switchable source failures
//! - [`render`] - Render port that records every batch it receives

pub mod config;
pub mod fixtures;
pub mod model;
pub mod render;

pub use config::InMemoryConfigStore;
pub use fixtures::{horizontal_segment, viewport, PlaceBuilder, SegmentBuilder};
pub use model::FaultyModel;
pub use render::RecordingRenderPort;
