pub mod lobby;

#[cfg(feature = "client")]
pub mod client;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

/// Row index into the participant roster.
pub type Position = usize;
