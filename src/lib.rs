//! Animated portfolio front-end compiled to WebAssembly.
//!
//! `core`, `input` and `site` are platform-independent and build on the host
//! for tests. Everything that touches the DOM is compiled for `wasm32` only.

pub mod core;
pub mod input;
pub mod site;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use app::start;
