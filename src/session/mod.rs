//! Session module - saved-session round-trip and firmware export payload.

mod export;
mod file;
mod record;

pub use export::*;
pub use file::*;
pub use record::*;
