// src/specs/mod.rs
//! # Program page parsing
//!
//! Reads one generated program page (one conference day) into `model::Session`
//! records. The page is a single long table; sessions and presentations are not
//! nested in the markup, they are runs of consecutive `<tr>` rows told apart
//! by a few markers (see `config::markers`).
//!
//! ## Pipeline
//! ```text
//! html ─ rows::extract_rows ─▶ [row] ─ segment::partition ─▶ [Partition]
//!      ─ session::build_session ─▶ Session { presentations, .. }
//! ```
//! `program::parse_doc` runs the whole thing for one page.
//!
//! ## Conventions
//! - Pure text in, records out. No fetching, caching or writing here.
//! - Boundaries are found by an explicit scan for start rows, then sliced.
//! - Markers are literal and case-sensitive; the pages are machine-generated.
//! - Anything unexpected is a `ParseError` for the whole page. There is no
//!   per-session recovery.
pub mod patterns;
pub mod program;
pub mod rows;
pub mod segment;
pub mod session;

pub use patterns::Patterns;
pub use program::parse_doc;
