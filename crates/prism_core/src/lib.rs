//! Prism Core - scene description and output plumbing.
//!
//! This crate provides:
//!
//! - **Scene description types**: `Material`, `Light`
//! - **Framebuffer**: `ImageBuffer` with PPM and `image`-crate serializers
//! - **Settings**: `RenderSettings` loaded from JSON
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{ImageBuffer, RenderSettings};
//!
//! let settings = RenderSettings::load("render.json")?;
//! let image = ImageBuffer::new(settings.width, settings.height);
//! image.save(&settings.output)?;
//! ```

pub mod framebuffer;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use framebuffer::{color_to_rgb, FramebufferError, ImageBuffer};
pub use scene::{Color, Light, Material};
pub use settings::{RenderSettings, SettingsError, MAX_DEPTH_LIMIT};
