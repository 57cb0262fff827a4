// src/api/mod.rs

/// Service object injected into consumers.
pub mod service;
/// Backend response normalization.
pub mod wire;

pub use service::DashaService;
pub use wire::{detect_shape, normalize_response, WireShape};
