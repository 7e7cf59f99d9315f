//! Plain records used alongside the selector builder.
//!
//! - [`Rectangle`]: width, height and a derived area
//! - [`roundtrip`]: JSON serialization and positional reconstruction
//!
//! ```rust
//! use records::{Rectangle, from_json, to_json};
//!
//! let rect = Rectangle::new(2.0, 3.0);
//! let text = to_json(&rect)?;
//! assert_eq!(text, r#"{"width":2.0,"height":3.0}"#);
//!
//! let back: Rectangle = from_json(&text)?;
//! assert_eq!(back.area(), 6.0);
//! # Ok::<(), records::RecordError>(())
//! ```

pub mod error;
pub mod rectangle;
pub mod roundtrip;

pub use error::RecordError;
pub use rectangle::Rectangle;
pub use roundtrip::{FromFieldValues, field_values, from_json, from_json_with, to_json};
