//! Lay a read's bases over the reference coordinate axis.

use super::cigar::{CigarOp, OpKind};

/// Placeholder glyph for reference columns not covered by a read base.
pub const GAP: u8 = b'-';

/// Reconstruct the reference-anchored representation of one read.
///
/// `start` is the 1-based reference column of the first aligned base. The
/// result always has exactly `ref_len` characters: the segment implied by
/// `start` and the edit script is truncated from the right or padded with
/// gap characters to fit. A copy that would run past the end of `seq`
/// yields the bases that are available and nothing more; both cases are
/// deliberate clamping, not errors, so one malformed record cannot abort
/// a whole-file visualization.
pub fn reconstruct(seq: &[u8], ops: &[CigarOp], start: usize, ref_len: usize) -> String {
    let mut out = vec![GAP; start.saturating_sub(1)];
    out.reserve(ref_len.saturating_sub(out.len()));

    let mut read_pos = 0usize;
    for op in ops {
        match op.kind {
            // Consume read bases and emit them at the current column
            OpKind::Match | OpKind::SeqMatch | OpKind::Mismatch => {
                if read_pos < seq.len() {
                    let end = (read_pos + op.len).min(seq.len());
                    out.extend_from_slice(&seq[read_pos..end]);
                }
                read_pos += op.len;
            }
            // Consume read bases without emitting: no reference column exists
            OpKind::Ins | OpKind::SoftClip => read_pos += op.len,
            // Emit gaps without consuming read bases
            OpKind::Del | OpKind::Skip | OpKind::Pad => {
                out.extend(std::iter::repeat(GAP).take(op.len));
            }
            // Hard-clipped bases are already absent from the stored sequence
            OpKind::HardClip | OpKind::Other => {}
        }
    }

    // Truncates from the right or pads with gaps; leading positional gaps
    // are never sacrificed.
    out.resize(ref_len, GAP);
    String::from_utf8(out).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pileup::cigar::parse_cigar;

    fn run(seq: &str, cigar: &str, start: usize, ref_len: usize) -> String {
        let ops = parse_cigar(cigar).unwrap();
        reconstruct(seq.as_bytes(), &ops, start, ref_len)
    }

    #[test]
    fn match_round_trip() {
        assert_eq!(run("ACGT", "4M", 3, 10), "--ACGT----");
    }

    #[test]
    fn deletion_emits_gaps() {
        assert_eq!(run("AC", "2M3D", 1, 10), "AC--------");
    }

    #[test]
    fn insertion_absorbed() {
        assert_eq!(run("ACGTT", "3M2I", 1, 5), "ACG--");
    }

    #[test]
    fn soft_clip_excluded() {
        assert_eq!(run("NNACGT", "2S4M", 5, 12), "----ACGT----");
    }

    #[test]
    fn hard_clip_leaves_cursor_alone() {
        assert_eq!(run("ACGT", "2H4M", 1, 6), "ACGT--");
    }

    #[test]
    fn skip_and_pad_emit_gaps() {
        assert_eq!(run("ACGT", "2M2N1P2M", 1, 8), "AC---GT-");
    }

    #[test]
    fn unknown_op_is_a_no_op() {
        assert_eq!(run("ACGT", "3B4M", 1, 6), "ACGT--");
    }

    #[test]
    fn truncates_from_the_right() {
        assert_eq!(run("ACGTACGT", "8M", 1, 4), "ACGT");
        // Leading positional gaps survive truncation
        assert_eq!(run("ACGTACGT", "8M", 3, 6), "--ACGT");
    }

    #[test]
    fn short_sequence_copies_what_is_available() {
        assert_eq!(run("AC", "5M", 1, 8), "AC------");
        // Follow-up copies after exhaustion emit nothing
        assert_eq!(run("AC", "5M3M", 1, 8), "AC------");
    }

    #[test]
    fn length_invariant_holds_on_edge_cases() {
        assert_eq!(run("", "", 1, 7), "-------");
        assert_eq!(run("", "4M", 1, 7), "-------");
        assert_eq!(run("ACGT", "4M", 100, 7).len(), 7);
        assert_eq!(run("ACGT", "4M", 100, 7), "-------");
        assert_eq!(run("ACGT", "4M", 1, 0), "");
    }

    #[test]
    fn start_at_one_emits_no_leading_gaps() {
        assert_eq!(run("ACGT", "4M", 1, 4), "ACGT");
    }
}
