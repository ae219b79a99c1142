use std::io::Write;

use crate::args::EnzymesArgs;
use crate::errors::*;

pub fn main(args: &EnzymesArgs) -> Result<()> {
    let catalog = super::load_catalog(&args.catalog)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Name\tSite\tCut\tPalindromic").chain_err(|| "failed to write output header")?;

    for enzyme in catalog.iter() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            enzyme.name(),
            enzyme.site(),
            enzyme.cut(),
            if enzyme.pattern().is_palindrome() {
                "yes"
            } else {
                "no"
            }
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}
