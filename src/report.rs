use std::fs::File;
use std::io;
use std::io::Write;

use serde::Serialize;

use crate::constants::CSV_LIST_SEPARATOR;
use crate::digest::DigestRecord;
use crate::errors::*;

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::stdout()))
    }
}

pub fn write_text(out: &mut dyn Write, records: &[DigestRecord]) -> Result<()> {
    for record in records {
        let result = if record.is_digested() {
            writeln!(out, "{} digested with {}", record.sequence, record.enzyme)
                .and_then(|_| writeln!(out, "Restriction sites location: {:?}", record.sites))
                .and_then(|_| writeln!(out, "Fragments: {:?}\n", record.fragments))
        } else {
            writeln!(
                out,
                "{} no restriction sites for {}\n",
                record.sequence, record.enzyme
            )
        };

        result.chain_err(|| "failed to write report")?;
    }

    out.flush().chain_err(|| "failed to write report")
}

#[derive(Serialize)]
struct Row<'a> {
    sequence: &'a str,
    enzyme: &'a str,
    sites: String,
    cuts: String,
    fragments: String,
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(CSV_LIST_SEPARATOR)
}

pub fn write_csv<W: Write>(out: W, records: &[DigestRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer
            .serialize(Row {
                sequence: &record.sequence,
                enzyme: &record.enzyme,
                sites: join(&record.sites),
                cuts: join(&record.cuts),
                fragments: join(&record.fragments),
            })
            .chain_err(|| "failed to write CSV row")?;
    }

    writer.flush().chain_err(|| "failed to write CSV report")
}
