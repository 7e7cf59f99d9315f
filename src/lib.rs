//! Coursework utilities: a validated CSS selector builder plus a small
//! rectangle record with JSON round-tripping.
//!
//! The member crates are re-exported here so callers need a single dependency.
//!
//! ```rust
//! use coursework::selector::{combine, element, Combinator};
//!
//! let nav = element("nav").class_name("top")?;
//! let link = element("a").pseudo_class("hover")?;
//! assert_eq!(
//!     combine(&nav, Combinator::Child, &link).to_string(),
//!     "nav.top > a:hover"
//! );
//! # Ok::<(), coursework::Error>(())
//! ```

pub mod error;
pub mod log_init;

pub use records;
pub use selector;

pub use error::{Error, Result};
pub use log_init::init_logger;
pub use records::{Rectangle, RecordError};
pub use selector::{Combinator, SelectorError, SelectorExpression};
