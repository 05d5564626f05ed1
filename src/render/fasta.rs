//! Alignment-preserving FASTA renderer.
//!
//! Gap characters are kept verbatim so the records stay column-aligned;
//! this is not a biological sequence export.

use crate::pileup::AlignmentSet;

const LINE_WIDTH: usize = 60;

pub fn render(set: &AlignmentSet) -> String {
    let mut out = String::new();
    out.push_str(">Reference\n");
    wrap_into(&mut out, &set.reference);
    for read in &set.reads {
        out.push_str(&format!(
            ">{} position={} cigar={}\n",
            read.name, read.start, read.cigar
        ));
        wrap_into(&mut out, &read.aligned);
    }
    out
}

fn wrap_into(out: &mut String, seq: &str) {
    for chunk in seq.as_bytes().chunks(LINE_WIDTH) {
        out.push_str(std::str::from_utf8(chunk).unwrap());
        out.push('\n');
    }
}
