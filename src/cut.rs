use std::collections::BTreeSet;

use bio_types::strand::Strand;

use crate::sequence::Topology;
use crate::site::RestrictionSite;

/// Position of the top-strand cut for a single site. Sites found on the
/// reverse strand cut at the mirror image of the enzyme's offset.
pub fn resolve_cut(site: &RestrictionSite, len: usize, topology: Topology) -> usize {
    let enzyme = site.enzyme;
    let cut = match site.strand {
        Strand::Reverse => site.start + (enzyme.len() - enzyme.cut()),
        _ => site.start + enzyme.cut(),
    };

    match topology {
        Topology::Linear => usize::min(cut, len),
        Topology::Circular if len > 0 => cut % len,
        Topology::Circular => 0,
    }
}

/// Unique cut positions for a set of sites, in ascending order.
pub fn resolve_cuts(sites: &[RestrictionSite], len: usize, topology: Topology) -> Vec<usize> {
    sites
        .iter()
        .map(|site| resolve_cut(site, len, topology))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
