//! CIGAR edit scripts: run-length-encoded alignment operations.

use crate::utils::Result;
use std::fmt;

/// Operation kinds from the standard CIGAR alphabet `M,I,D,N,S,H,P,=,X`.
///
/// Letters outside the alphabet map to `Other`, which neither consumes
/// read bases nor emits reference columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Match,
    SeqMatch,
    Mismatch,
    Ins,
    Del,
    Skip,
    SoftClip,
    HardClip,
    Pad,
    Other,
}

impl OpKind {
    pub fn from_letter(letter: char) -> OpKind {
        match letter {
            'M' => OpKind::Match,
            '=' => OpKind::SeqMatch,
            'X' => OpKind::Mismatch,
            'I' => OpKind::Ins,
            'D' => OpKind::Del,
            'N' => OpKind::Skip,
            'S' => OpKind::SoftClip,
            'H' => OpKind::HardClip,
            'P' => OpKind::Pad,
            _ => OpKind::Other,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            OpKind::Match => 'M',
            OpKind::SeqMatch => '=',
            OpKind::Mismatch => 'X',
            OpKind::Ins => 'I',
            OpKind::Del => 'D',
            OpKind::Skip => 'N',
            OpKind::SoftClip => 'S',
            OpKind::HardClip => 'H',
            OpKind::Pad => 'P',
            OpKind::Other => '?',
        }
    }
}

/// A single run-length-encoded alignment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarOp {
    pub len: usize,
    pub kind: OpKind,
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.kind.letter())
    }
}

/// Parse a CIGAR string into an edit script.
///
/// Operation order is preserved; it is applied left-to-right against both
/// the read and reference cursors during reconstruction.
pub fn parse_cigar(text: &str) -> Result<Vec<CigarOp>> {
    let mut ops = Vec::new();
    let mut len = 0usize;
    let mut saw_digit = false;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            len = len * 10 + digit as usize;
            saw_digit = true;
        } else {
            if !saw_digit {
                return Err(format!(
                    "Invalid CIGAR '{text}': operation '{ch}' has no length"
                ));
            }
            ops.push(CigarOp {
                len,
                kind: OpKind::from_letter(ch),
            });
            len = 0;
            saw_digit = false;
        }
    }
    if saw_digit {
        return Err(format!(
            "Invalid CIGAR '{text}': trailing length without an operation"
        ));
    }
    Ok(ops)
}
