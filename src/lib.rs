//! Presentation behaviours for the AxionCo marketing site.
//!
//! Each behaviour is a plain controller (compiled everywhere, unit tested on
//! the host) plus DOM wiring under [`wasm`] that only exists on `wasm32`.

pub mod canvas;
pub mod config;
pub mod header;
pub mod mailto;
pub mod motion;
pub mod nav;
pub mod parallax;
pub mod reveal;

pub use config::SiteConfig;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
