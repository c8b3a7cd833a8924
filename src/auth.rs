//! Bearer credentials and the single-slot holder that gates every authenticated call.

pub mod secret;
pub mod slot;
pub mod token;

pub use secret::*;
pub use slot::*;
pub use token::*;
