//! Linear-space global alignment of nucleotide sequences.
//!
//! This crate provides a divide-and-conquer (Hirschberg / Myers-Miller) pairwise
//! aligner over the 16-symbol IUPAC nucleotide alphabet, with gap costs that differ
//! by which sequence the gap falls in (query vs. target) and by position along the
//! sequence (left end, interior, right end). It produces an optimal alignment score
//! and a CIGAR-encoded edit script in `O(min(query_len, target_len))` working memory.
//!
//! The crate is a single focused component: it consumes two byte buffers plus a
//! [`Scoring`](crate::scoring::Scoring) configuration and returns a CIGAR string plus
//! alignment statistics. Sequence I/O, file-format detection and command-line parsing
//! are left to callers.

mod errors;
pub mod alphabet;
pub mod scoring;
pub mod cigar;
pub mod aligner;

pub use errors::AlignError;
pub use scoring::{PositionClass, Scoring, Side};
pub use cigar::CigarOp;
pub use aligner::{AlignStats, Aligner};
