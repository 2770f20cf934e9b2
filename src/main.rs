//! Zellij plugin entry point.
//!
//! The plugin only exists on `wasm32`; see `plugin.rs` for the shim that maps
//! Zellij events and pipe messages onto the library's signal bus. Native
//! builds get a stub binary so the library and its tests build on the host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin;

#[cfg(target_arch = "wasm32")]
zellij_tile::register_plugin!(plugin::State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("nodelist is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm in Zellij");
}
