use rayon::prelude::*;

use crate::cut::resolve_cuts;
use crate::enzyme::EnzymeSpec;
use crate::fragment;
use crate::progress::ProgressBar;
use crate::sequence::Sequence;
use crate::site::find_sites;

/// Outcome of digesting one sequence with one enzyme.
#[derive(Clone, Debug, PartialEq)]
pub struct DigestRecord {
    pub sequence: String,
    pub enzyme: String,
    /// Start of each recognition site (0-based, ascending, unique)
    pub sites: Vec<usize>,
    /// Unique cut positions (0-based, ascending)
    pub cuts: Vec<usize>,
    /// Fragment lengths, ordered by fragment start
    pub fragments: Vec<usize>,
}

impl DigestRecord {
    /// False if the enzyme has no site in the sequence; the single fragment is
    /// then the undigested molecule.
    pub fn is_digested(&self) -> bool {
        !self.sites.is_empty()
    }
}

pub fn digest_one(sequence: &Sequence, enzyme: &EnzymeSpec) -> DigestRecord {
    let len = sequence.len();
    let topology = sequence.topology();

    let sites = find_sites(sequence, enzyme);
    let cuts = resolve_cuts(&sites, len, topology);
    let fragments = fragment::fragment(len, topology, &cuts);

    let mut starts: Vec<usize> = sites.iter().map(|site| site.start).collect();
    starts.dedup();

    DigestRecord {
        sequence: sequence.id().to_owned(),
        enzyme: enzyme.name().to_owned(),
        sites: starts,
        cuts,
        fragments: fragment::lengths(&fragments),
    }
}

fn pairs<'a>(
    sequences: &'a [Sequence],
    enzymes: &'a [EnzymeSpec],
) -> Vec<(&'a Sequence, &'a EnzymeSpec)> {
    sequences
        .iter()
        .flat_map(|sequence| enzymes.iter().map(move |enzyme| (sequence, enzyme)))
        .collect()
}

/// Digests every sequence with every enzyme. Records are ordered by sequence
/// and then by the order of `enzymes`.
pub fn digest(sequences: &[Sequence], enzymes: &[EnzymeSpec]) -> Vec<DigestRecord> {
    pairs(sequences, enzymes)
        .into_iter()
        .map(|(sequence, enzyme)| digest_one(sequence, enzyme))
        .collect()
}

/// Same as `digest`, but with pairs processed on the rayon thread pool.
pub fn par_digest(
    sequences: &[Sequence],
    enzymes: &[EnzymeSpec],
    pg: &ProgressBar,
) -> Vec<DigestRecord> {
    pairs(sequences, enzymes)
        .par_iter()
        .map(|&(sequence, enzyme)| {
            let record = digest_one(sequence, enzyme);

            pg.inc(1);
            record
        })
        .collect()
}
