use displaydoc::Display;
use thiserror::Error;

#[derive(Debug, Error, Display)]
#[non_exhaustive]
/// Errors that may be thrown while configuring or running the aligner
pub enum AlignError {
    /// scratch buffers could not grow to the required size
    ScratchAllocation,
    /// gap cost '{field}' must be non-negative, got {value}
    NegativeGapCost {
        /// name of the offending `Scoring` field
        field: &'static str,
        /// the negative value that was rejected
        value: i64,
    },
    /// malformed CIGAR string: '{cigar}'
    MalformedCigar {
        /// the string that failed to parse
        cigar: String,
    },
    /// CIGAR run reads past the end of sequence {which}
    CigarOutOfBounds {
        /// which sequence ran out first, "a" or "b"
        which: &'static str,
    },
}
