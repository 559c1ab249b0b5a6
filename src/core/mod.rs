//! Core comparison building blocks: right-padding alignment, the
//! position-by-position scorer, and comparison parameters. These are the
//! primitives consumed by the high-level `api` module.
pub mod align;
pub mod params;
pub mod score;
