use crate::cli::Cli;
use crate::pileup::AlignmentSet;
use crate::render::{render, OutputFormat};
use crate::utils::{read_reference, read_sam_records, Result};
use std::fs;
use std::io::{self, Write};

pub fn view(args: &Cli) -> Result<()> {
    let reference = read_reference(&args.genome_path)?;
    log::info!("Reference length: {} bp", reference.len());

    let records = read_sam_records(&args.reads_path)?;
    log::info!("Loaded {} forward-strand records", records.len());

    let source = args.reads_path.display().to_string();
    let set = AlignmentSet::build(reference, source, &records);

    let format = OutputFormat::from_tag(&args.format);
    let output = render(format, &set);

    match &args.output {
        Some(path) => fs::write(path, &output)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?,
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|e| format!("Failed to write to standard output: {e}"))?,
    }
    Ok(())
}
