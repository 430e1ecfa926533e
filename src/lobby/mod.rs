pub mod draft;
pub use draft::*;

pub mod entry;
pub use entry::*;

pub mod message;
pub use message::*;

pub mod roster;
pub use roster::*;
