//! Self-contained HTML document renderer.
//!
//! The document is static markup: a header with a position-jump control,
//! a sticky reference block (ruler plus colorized reference), and one
//! block per read. Ruler cells and sequence characters share the same
//! per-base column width (`ch` units over a monospace font) so the two
//! stay visually aligned.

use crate::pileup::{reconstruct::GAP, AlignmentSet, ReadProjection};
use itertools::Itertools;

const RULER_STEP: usize = 10;

const STYLE: &str = "\
body { font-family: 'Courier New', monospace; margin: 0; background: #fafafa; }
.header { padding: 8px 16px; background: #2d333b; color: #eee; }
.header h1 { margin: 0; font-size: 16px; }
.jump { margin-top: 4px; font-size: 12px; }
.reference { position: sticky; top: 0; background: #fff; border-bottom: 1px solid #ccc; padding: 4px 16px; }
.read { padding: 2px 16px; }
.label { font-weight: bold; }
.seq { white-space: pre; }
.ruler { white-space: pre; }
.ruler span { display: inline-block; width: 10ch; text-align: right; color: #888; }
.base-a { color: #22863a; }
.base-c { color: #005cc5; }
.base-g { color: #b08800; }
.base-t { color: #d73a49; }
.base-n { color: #6f42c1; }
.gap { color: #999; }
.cigar { color: #666; font-size: 12px; }";

pub fn render(set: &AlignmentSet) -> String {
    let mut generator = Generator::new();
    generator.generate(set);
    generator.buffer
}

struct Generator {
    buffer: String,
}

impl Generator {
    fn new() -> Self {
        Self {
            buffer: String::with_capacity(10_000),
        }
    }

    fn add_line(&mut self, line: &str) {
        self.buffer.reserve(line.len() + 1);
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn generate(&mut self, set: &AlignmentSet) {
        self.start_document(set.reference.len());
        self.add_reference_block(&set.reference);
        for read in &set.reads {
            self.add_read_block(read);
        }
        self.end_document();
    }

    fn start_document(&mut self, ref_len: usize) {
        self.add_line("<!DOCTYPE html>");
        self.add_line("<html lang=\"en\">");
        self.add_line("<head>");
        self.add_line("<meta charset=\"utf-8\">");
        self.add_line(&format!(
            "<title>{} v{}</title>",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        self.add_line("<style>");
        self.add_line(STYLE);
        self.add_line("</style>");
        self.add_line("</head>");
        self.add_line("<body>");
        self.add_line("<div class=\"header\">");
        self.add_line(&format!(
            "<h1>{} v{}</h1>",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        self.add_line(&format!(
            "<div class=\"jump\">Reference length: {ref_len} bp &middot; \
             Jump to position: <input type=\"number\" min=\"1\" max=\"{ref_len}\"></div>"
        ));
        self.add_line("</div>");
    }

    fn add_reference_block(&mut self, reference: &str) {
        self.add_line("<div class=\"reference\">");
        self.add_ruler(reference.len());
        self.add_line(&format!(
            "<div class=\"seq\">{}</div>",
            colorize(reference)
        ));
        self.add_line("</div>");
    }

    fn add_ruler(&mut self, ref_len: usize) {
        let mut cells = String::new();
        let mut pos = RULER_STEP;
        while pos <= ref_len {
            cells.push_str(&format!("<span>{pos}</span>"));
            pos += RULER_STEP;
        }
        self.add_line(&format!("<div class=\"ruler\">{cells}</div>"));
    }

    fn add_read_block(&mut self, read: &ReadProjection) {
        self.add_line("<div class=\"read\">");
        self.add_line(&format!(
            "<span class=\"label\">{} ({})</span> <span class=\"cigar\">[CIGAR: {}]</span>",
            escape(&read.name),
            read.start,
            escape(&read.cigar)
        ));
        self.add_line(&format!(
            "<div class=\"seq\">{}</div>",
            colorize(&read.aligned)
        ));
        self.add_line("</div>");
    }

    fn end_document(&mut self) {
        self.add_line("</body>");
        self.add_line("</html>");
    }
}

/// Wrap runs of same-class characters in one span each.
fn colorize(seq: &str) -> String {
    let mut html = String::with_capacity(seq.len() * 2);
    for (class, group) in &seq.bytes().chunk_by(|base| base_class(*base)) {
        let run: String = group.map(char::from).collect();
        html.push_str(&format!("<span class=\"{class}\">{run}</span>"));
    }
    html
}

fn base_class(base: u8) -> &'static str {
    match base {
        b'A' => "base-a",
        b'C' => "base-c",
        b'G' => "base-g",
        b'T' => "base-t",
        GAP => "gap",
        _ => "base-n",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
