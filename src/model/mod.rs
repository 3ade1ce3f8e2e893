//! Data model shared by the WASM and no-WASM builds.

pub mod dtos;
pub mod structs;
