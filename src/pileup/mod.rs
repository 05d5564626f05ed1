//! Data model for the pileup: input records, projected reads, and the
//! alignment set consumed by every renderer.

pub mod cigar;
pub mod reconstruct;

use self::cigar::CigarOp;
use self::reconstruct::reconstruct;
use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// One mapped, forward-strand record from the alignment source.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRecord {
    pub name: String,
    /// 1-based reference column of the first non-clipped, non-inserted base.
    pub start: usize,
    pub seq: Vec<u8>,
    pub ops: Vec<CigarOp>,
}

/// A read projected onto the reference coordinate axis.
///
/// `aligned` always has exactly as many characters as the reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadProjection {
    pub name: String,
    pub start: usize,
    pub aligned: String,
    pub cigar: String,
}

/// The unit passed to every renderer: the reference plus the projected
/// reads in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentSet {
    pub reference: String,
    /// Label of the alignment source, shown by the text renderer.
    pub source: String,
    pub reads: Vec<ReadProjection>,
}

impl AlignmentSet {
    /// Project every record onto the reference axis.
    ///
    /// Reconstruction is independent per read, so records are mapped in
    /// parallel; display order stays the input order.
    pub fn build(reference: String, source: String, records: &[AlignmentRecord]) -> AlignmentSet {
        let ref_len = reference.len();
        let reads = records
            .par_iter()
            .map(|rec| ReadProjection {
                name: rec.name.clone(),
                start: rec.start,
                aligned: reconstruct(&rec.seq, &rec.ops, rec.start, ref_len),
                cigar: rec.ops.iter().join(""),
            })
            .collect();
        AlignmentSet {
            reference,
            source,
            reads,
        }
    }
}
