use crate::pileup::{cigar::parse_cigar, AlignmentRecord};
use crate::utils::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FLAG_UNMAPPED: u16 = 0x4;
const FLAG_REVERSE: u16 = 0x10;
const NUM_MANDATORY_FIELDS: usize = 11;

/// Read mapped, forward-strand records from a SAM text file.
///
/// Header lines are skipped. Unmapped records (FLAG 0x4, POS 0, or CIGAR
/// `*`) and reverse-strand records (FLAG 0x10) are filtered out here, so
/// the reconstruction core only ever sees forward-strand alignments.
pub fn read_sam_records(path: &Path) -> Result<Vec<AlignmentRecord>> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open alignment file {}: {}", path.display(), e))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut num_skipped = 0usize;
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Error reading line {}: {}", line_num + 1, e))?;
        if line.is_empty() || line.starts_with('@') {
            continue;
        }
        match parse_record(&line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => num_skipped += 1,
            Err(e) => Err(format!("Malformed record on line {}: {}", line_num + 1, e))?,
        }
    }
    if num_skipped > 0 {
        log::info!("Skipped {num_skipped} unmapped or reverse-strand records");
    }
    Ok(records)
}

fn parse_record(line: &str) -> Result<Option<AlignmentRecord>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < NUM_MANDATORY_FIELDS {
        return Err(format!(
            "expected at least {} fields, got {}",
            NUM_MANDATORY_FIELDS,
            fields.len()
        ));
    }

    let flag: u16 = fields[1]
        .parse()
        .map_err(|_| format!("invalid FLAG '{}'", fields[1]))?;
    let start: usize = fields[3]
        .parse()
        .map_err(|_| format!("invalid POS '{}'", fields[3]))?;
    let cigar_text = fields[5];
    if flag & (FLAG_UNMAPPED | FLAG_REVERSE) != 0 || start == 0 || cigar_text == "*" {
        return Ok(None);
    }

    let seq = if fields[9] == "*" {
        Vec::new()
    } else {
        fields[9].as_bytes().to_ascii_uppercase()
    };

    Ok(Some(AlignmentRecord {
        name: fields[0].to_string(),
        start,
        seq,
        ops: parse_cigar(cigar_text)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pileup::cigar::{CigarOp, OpKind};

    fn sam_line(name: &str, flag: u16, pos: usize, cigar: &str, seq: &str) -> String {
        format!("{name}\t{flag}\tref\t{pos}\t60\t{cigar}\t*\t0\t0\t{seq}\t*")
    }

    #[test]
    fn parse_forward_record_ok() {
        let line = sam_line("read1", 0, 5, "4M", "acgt");
        let record = parse_record(&line).unwrap().unwrap();
        assert_eq!(record.name, "read1");
        assert_eq!(record.start, 5);
        assert_eq!(record.seq, b"ACGT");
        assert_eq!(record.ops, vec![CigarOp { len: 4, kind: OpKind::Match }]);
    }

    #[test]
    fn reverse_strand_record_filtered() {
        let line = sam_line("read1", 16, 5, "4M", "ACGT");
        assert_eq!(parse_record(&line).unwrap(), None);
    }

    #[test]
    fn unmapped_record_filtered() {
        assert_eq!(parse_record(&sam_line("r", 4, 5, "4M", "ACGT")).unwrap(), None);
        assert_eq!(parse_record(&sam_line("r", 0, 0, "4M", "ACGT")).unwrap(), None);
        assert_eq!(parse_record(&sam_line("r", 0, 5, "*", "ACGT")).unwrap(), None);
    }

    #[test]
    fn missing_sequence_becomes_empty() {
        let record = parse_record(&sam_line("r", 0, 1, "4M", "*")).unwrap().unwrap();
        assert!(record.seq.is_empty());
    }

    #[test]
    fn truncated_line_err() {
        assert_eq!(
            parse_record("read1\t0\tref"),
            Err("expected at least 11 fields, got 3".to_string())
        );
    }

    #[test]
    fn invalid_flag_err() {
        let line = sam_line("r", 0, 1, "4M", "ACGT").replace("\t0\t", "\tx\t");
        assert!(parse_record(&line).unwrap_err().contains("invalid FLAG"));
    }
}
