use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::errors::*;

fn is_content(line: &str) -> bool {
    let line = line.trim();

    !line.is_empty() && !line.starts_with('#')
}

/// Reads tab-separated rows, skipping blank lines and `#` comments.
pub fn read_from<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut table: Vec<Vec<String>> = Vec::new();
    for line in reader.lines() {
        let line = line.chain_err(|| "error reading line from table")?;
        if is_content(&line) {
            table.push(line.split('\t').map(|v| v.to_string()).collect());
        }
    }

    Ok(table)
}

pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).chain_err(|| format!("failed to open table {:?}", path))?;

    read_from(BufReader::new(file))
}

/// Reads enzyme names separated by commas and/or whitespace.
pub fn names_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.chain_err(|| "error reading line from list of names")?;
        if is_content(&line) {
            names.extend(
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|v| !v.is_empty())
                    .map(|v| v.to_string()),
            );
        }
    }

    Ok(names)
}

pub fn read_names<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<String>> {
    let file = File::open(path).chain_err(|| format!("failed to open list of names {:?}", path))?;

    names_from(BufReader::new(file))
}
