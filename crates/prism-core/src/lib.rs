//! Core types for the Prism grid framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: compass directions,
//! grid positions, strongly-typed identifiers, and the grid error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod position;

pub use direction::{Axis, Diagonal, Direction};
pub use error::{GridError, ParseDirectionError};
pub use id::{GridInstanceId, PointerId};
pub use position::Position;
