//! Single-pass inverted indices and a set-algebra query engine over one
//! match's event sequence.
//!
//! The crate is the query side of the workspace:
//! - [`IndexBuilder`] folds a [`domain::GameRecord`] into the immutable
//!   [`MatchIndex`] in one O(N) pass, seeding every axis from the
//!   supplied [`lookup::CategoryDomain`]
//! - [`QueryEngine`] answers exact, list, threshold, and composite
//!   queries against the snapshot, returning sets of event ids
//!
//! Build-time anomalies (a value outside an axis's domain, from an
//! older format version) are tolerated per axis; query-time anomalies
//! raise [`ValidationError`] with the offending value and the accepted
//! domain.

pub mod axis;
pub mod builder;
pub mod error;
pub mod index;
pub mod query;

pub use axis::{
    BandedAxis, BandedKind, CategoricalAxis, CategoricalKind, MarkerKind, OrdinalAxis,
    OrdinalKind, Polarity,
};
pub use builder::IndexBuilder;
pub use error::{Result, ValidationError};
pub use index::{MatchIndex, Participation};
pub use query::{HitKind, QueryEngine, RangeQuery, Side};
