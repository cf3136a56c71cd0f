//! Color model.
//!
//! Straight-alpha RGBA bytes, matching what the external rasterizer consumes
//! directly. Premultiplication, gradients, and blending are renderer
//! concerns and stay outside the engine.

mod color;

pub use color::Rgba;
