//! Password generation from uppercase, lowercase, digit, and special
//! character classes, drawn uniformly from a cryptographically secure source.
//!
//! ```no_run
//! let password = passgen::pass::generate_flags(16, true, true, true, false)?;
//! assert_eq!(password.len(), 16);
//! # Ok::<(), passgen::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use pass::{CharClass, ClassSet, Password};
pub use rng::{IndexSource, SecureIndex};
