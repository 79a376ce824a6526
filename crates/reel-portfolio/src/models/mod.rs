//! Canonical domain models shared across the catalog, embed and web layers

pub mod video;

pub use video::{AspectRatio, Software, Video};
