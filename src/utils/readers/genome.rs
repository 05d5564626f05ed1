use crate::utils::Result;
use needletail::parse_fastx_file;
use std::path::Path;

/// Read the reference sequence from the first record of a FASTA file.
///
/// The sequence is uppercased; line breaks are already stripped by the
/// parser. Extra records are ignored with a warning.
pub fn read_reference(path: &Path) -> Result<String> {
    let mut reader = parse_fastx_file(path)
        .map_err(|e| format!("Failed to open reference FASTA {}: {}", path.display(), e))?;

    let record = reader
        .next()
        .ok_or_else(|| format!("Reference FASTA {} contains no records", path.display()))?
        .map_err(|e| format!("Failed to parse reference FASTA record: {e}"))?;
    let seq = record.seq().to_ascii_uppercase();
    let seq = String::from_utf8(seq)
        .map_err(|e| format!("Reference sequence is not valid text: {e}"))?;
    if seq.is_empty() {
        return Err(format!(
            "Reference sequence in {} is empty",
            path.display()
        ));
    }

    if reader.next().is_some() {
        log::warn!(
            "{} contains multiple records, using the first one only",
            path.display()
        );
    }
    Ok(seq)
}
