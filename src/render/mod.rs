//! Renderers turning an [`AlignmentSet`] into one textual artifact.

pub mod fasta;
pub mod html;
pub mod text;

use crate::pileup::AlignmentSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
    Fasta,
}

impl OutputFormat {
    /// Select a format by tag, falling back to plain text for anything
    /// unrecognized.
    pub fn from_tag(tag: &str) -> OutputFormat {
        match tag.to_ascii_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "html" => OutputFormat::Html,
            "fasta" => OutputFormat::Fasta,
            other => {
                log::warn!("Unknown output format '{other}', falling back to text");
                OutputFormat::Text
            }
        }
    }
}

/// Render the alignment set with the selected renderer.
pub fn render(format: OutputFormat, set: &AlignmentSet) -> String {
    match format {
        OutputFormat::Text => text::render(set),
        OutputFormat::Html => html::render(set),
        OutputFormat::Fasta => fasta::render(set),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pileup::{AlignmentRecord, AlignmentSet};

    fn small_set() -> AlignmentSet {
        let records = vec![
            AlignmentRecord {
                name: "read1".to_string(),
                start: 3,
                seq: b"ACGT".to_vec(),
                ops: crate::pileup::cigar::parse_cigar("4M").unwrap(),
            },
            AlignmentRecord {
                name: "read2".to_string(),
                start: 1,
                seq: b"TT".to_vec(),
                ops: crate::pileup::cigar::parse_cigar("2M").unwrap(),
            },
        ];
        AlignmentSet::build("ACGTACGTAC".to_string(), "reads.sam".to_string(), &records)
    }

    #[test]
    fn from_tag_selects_known_formats() {
        assert_eq!(OutputFormat::from_tag("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_tag("HTML"), OutputFormat::Html);
        assert_eq!(OutputFormat::from_tag("fasta"), OutputFormat::Fasta);
    }

    #[test]
    fn from_tag_defaults_to_text() {
        assert_eq!(OutputFormat::from_tag("svg"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_tag(""), OutputFormat::Text);
    }

    #[test]
    fn rendering_is_deterministic() {
        let set = small_set();
        for format in [OutputFormat::Text, OutputFormat::Html, OutputFormat::Fasta] {
            assert_eq!(render(format, &set), render(format, &set));
        }
    }

    #[test]
    fn renderers_preserve_read_order() {
        let set = small_set();
        for format in [OutputFormat::Text, OutputFormat::Html, OutputFormat::Fasta] {
            let output = render(format, &set);
            let first = output.find("read1").unwrap();
            let second = output.find("read2").unwrap();
            assert!(first < second);
        }
    }
}
