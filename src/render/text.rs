//! Plain-text table renderer.

use crate::pileup::AlignmentSet;

const MIN_LABEL_WIDTH: usize = 20;
const RULER_STEP: usize = 10;
const REFERENCE_LABEL: &str = "Reference:";

pub fn render(set: &AlignmentSet) -> String {
    let labels: Vec<String> = set
        .reads
        .iter()
        .map(|read| format!("{} ({}):", read.name, read.start))
        .collect();
    let label_width = labels
        .iter()
        .map(String::len)
        .chain(std::iter::once(REFERENCE_LABEL.len()))
        .max()
        .unwrap_or(0)
        .max(MIN_LABEL_WIDTH);

    let mut out = String::new();
    out.push_str(&format!(
        "{} v{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!("Input: {}\n", set.source));
    out.push('\n');
    out.push_str(&ruler(label_width, set.reference.len()));
    out.push('\n');
    out.push_str(&format!(
        "{:<label_width$} {}\n",
        REFERENCE_LABEL, set.reference
    ));
    out.push('\n');
    for (label, read) in labels.iter().zip(&set.reads) {
        out.push_str(&format!(
            "{:<label_width$} {} [CIGAR: {}]\n",
            label, read.aligned, read.cigar
        ));
    }
    out
}

/// A row of column markers, one ending under every tenth reference column.
fn ruler(label_width: usize, ref_len: usize) -> String {
    let mut row = vec![b' '; ref_len];
    let mut pos = RULER_STEP;
    while pos <= ref_len {
        let marker = pos.to_string();
        row[pos - marker.len()..pos].copy_from_slice(marker.as_bytes());
        pos += RULER_STEP;
    }
    format!(
        "{}{}",
        " ".repeat(label_width + 1),
        String::from_utf8(row).unwrap()
    )
}
