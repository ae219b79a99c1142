use bio::alphabets::dna;
use bio_types::strand::Strand;

use crate::enzyme::EnzymeSpec;
use crate::pattern::Pattern;
use crate::sequence::{Sequence, Topology};

/// A recognition site. `start` is always given in forward-strand coordinates,
/// i.e. the leftmost base of the site on the top strand.
#[derive(Clone, Debug, PartialEq)]
pub struct RestrictionSite<'a> {
    pub enzyme: &'a EnzymeSpec,
    pub start: usize,
    pub strand: Strand,
}

/// Start of every window of `sequence` matching `pattern`. Windows of circular
/// sequences wrap around the end, giving exactly one window per base.
fn match_starts(sequence: &[u8], pattern: &Pattern, topology: Topology) -> Vec<usize> {
    let extended;
    let sequence = match topology {
        Topology::Linear => sequence,
        Topology::Circular => {
            extended = [sequence, &sequence[..pattern.len() - 1]].concat();
            &extended[..]
        }
    };

    sequence
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| pattern.matches(window))
        .map(|(idx, _)| idx)
        .collect()
}

fn collect_forward_sites<'a>(sequence: &Sequence, enzyme: &'a EnzymeSpec) -> Vec<RestrictionSite<'a>> {
    match_starts(sequence.seq(), enzyme.pattern(), sequence.topology())
        .into_iter()
        .map(|start| RestrictionSite {
            enzyme,
            start,
            strand: Strand::Forward,
        })
        .collect()
}

fn collect_reverse_sites<'a>(sequence: &Sequence, enzyme: &'a EnzymeSpec) -> Vec<RestrictionSite<'a>> {
    let len = sequence.len();
    let width = enzyme.len();
    let revcomp = dna::revcomp(sequence.seq());

    match_starts(&revcomp, enzyme.pattern(), sequence.topology())
        .into_iter()
        .map(|idx| {
            let start = match sequence.topology() {
                Topology::Linear => len - width - idx,
                Topology::Circular => (2 * len - width - idx) % len,
            };

            RestrictionSite {
                enzyme,
                start,
                strand: Strand::Reverse,
            }
        })
        .collect()
}

/// Finds every site of `enzyme` in `sequence` on either strand, ordered by
/// start with forward sites first. Overlapping sites are all reported; a
/// non-palindromic site may match both strands at the same start, and each
/// such match is kept since the two cut at different positions.
pub fn find_sites<'a>(sequence: &Sequence, enzyme: &'a EnzymeSpec) -> Vec<RestrictionSite<'a>> {
    if enzyme.pattern().is_empty() || enzyme.len() > sequence.len() {
        return Vec::new();
    }

    let mut sites = collect_forward_sites(sequence, enzyme);
    if !enzyme.pattern().is_palindrome() {
        sites.append(&mut collect_reverse_sites(sequence, enzyme));
    }

    // Stable sort keeps forward sites ahead of reverse sites at the same start
    sites.sort_by_key(|site| site.start);

    sites
}
