//! Browser-hosted WASM app.
//!
//! By default this crate builds as a stub so native targets (and plain
//! workspace `cargo test`) never need a wasm toolchain. The real app lives
//! behind `--features web` on a wasm32 target; Trunk enables it.

pub mod ui_model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
