//! Fluent builders for delimited regular expressions, with typed responses
//! for matching, replacing, splitting and filtering.
//!
//! # Example
//!
//! ```rust
//! use regular::{Expression, Group, PatternBuilder, SplitFlags};
//!
//! # fn main() -> Result<(), regular::BuildError> {
//! let expression = Expression::new()
//!     .add(r"\+")
//!     .digit(None)?
//!     .repeat(1, Some(3))
//!     .whitespace()
//!     .group(Group::new().digit(None)?.repeat(4, Some(10)));
//!
//! assert_eq!(expression.to_expression(), r"/\+[0-9]{1,3}\s([0-9]{4,10})/");
//!
//! let response = expression.matches("call +49 123456789 now");
//! assert!(response.is_successful());
//! assert_eq!(response.matches(), ["+49 123456789", "123456789"]);
//!
//! let parts = Expression::from_pattern(",").split("a,b,,c", None, SplitFlags::NONE.with_no_empty());
//! assert_eq!(parts.texts(), ["a", "b", "c"]);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod delimiter;
pub mod engine;
pub mod error;
pub mod expression;
pub mod flags;
pub mod group;
pub mod modifier;
pub mod response;

pub use builder::PatternBuilder;
pub use delimiter::Delimiter;
pub use engine::quote::quote;
pub use engine::{Engine, RegexEngine};
pub use error::BuildError;
pub use expression::Expression;
pub use flags::{GrepFlags, MatchFlags, SplitFlags, Subject};
pub use group::Group;
pub use modifier::Modifier;
pub use response::{
    Capture, GrepResponse, MatchKind, MatchResponse, Occurrence, Piece, ReplaceResponse,
    SplitResponse,
};
