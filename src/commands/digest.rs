use std::fs::File;
use std::io::BufWriter;

use crate::args::DigestArgs;
use crate::constants::CSV_EXTENSION;
use crate::digest::{par_digest, DigestRecord};
use crate::enzyme::{EnzymeCatalog, EnzymeSpec};
use crate::errors::*;
use crate::progress;
use crate::report;
use crate::sequence::{read_fasta, Sequence, Topology};
use crate::table;

fn select_enzymes(args: &DigestArgs, catalog: &EnzymeCatalog) -> Result<Vec<EnzymeSpec>> {
    let mut names = args.enzymes.clone();
    if let Some(filename) = &args.enzyme_list {
        eprintln!("Reading enzyme names from {:?}", filename);
        names.extend(table::read_names(filename)?);
    }

    if names.is_empty() {
        eprintln!("  no enzymes specified; using all {} enzymes in catalog.", catalog.len());

        Ok(catalog.enzymes().to_vec())
    } else {
        catalog
            .select(&names)
            .chain_err(|| "failed to select restriction enzymes")
    }
}

fn print_summary(sequences: &[Sequence], enzymes: &[EnzymeSpec], topology: Topology) {
    eprintln!("\nDigesting {} sequences with:\n", sequences.len());
    for enzyme in enzymes {
        eprintln!("  {}\t{}", enzyme.name(), enzyme.site());
    }

    match topology {
        Topology::Circular => eprintln!("\nCircular sequence option was selected.\n"),
        Topology::Linear => eprintln!("\nLinear sequence option was selected.\n"),
    }
}

fn write_reports(args: &DigestArgs, records: &[DigestRecord]) -> Result<()> {
    let mut out = report::open_file_or_stdout(&args.output)?;
    report::write_text(&mut out, records)?;

    if let Some(output) = &args.output {
        let filename = output.clone() + CSV_EXTENSION;
        eprintln!("  writing table of fragments to {:?}", filename);

        let file = File::create(&filename)
            .chain_err(|| format!("could not create output file {:?}", filename))?;
        report::write_csv(BufWriter::new(file), records)?;
    }

    Ok(())
}

pub fn main(args: &DigestArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    let catalog = super::load_catalog(&args.catalog)?;
    let enzymes = select_enzymes(args, &catalog)?;

    eprintln!("Reading sequences from {:?}", args.fasta);
    let sequences = read_fasta(&args.fasta, args.topology)?;
    eprintln!("  read {} {} sequences.", sequences.len(), args.topology);

    if args.verbose {
        print_summary(&sequences, &enzymes, args.topology);
    }

    let progress = progress::default(sequences.len() * enzymes.len());
    let records = par_digest(&sequences, &enzymes, &progress);
    progress.finish();

    let digested = records.iter().filter(|record| record.is_digested()).count();
    eprintln!("  {} of {} digests cut at least once.", digested, records.len());

    write_reports(args, &records)
}
