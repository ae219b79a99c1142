use crate::sequence::Topology;

/// Half-open interval `[start, end)` of a digested molecule. The fragment
/// spanning the origin of a circular molecule has `end <= start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl Fragment {
    fn new(start: usize, end: usize) -> Fragment {
        Fragment {
            start,
            end,
            len: end - start,
        }
    }

    fn wrapping(start: usize, end: usize, total: usize) -> Fragment {
        Fragment {
            start,
            end,
            len: (total - start) + end,
        }
    }

    pub fn wraps(&self) -> bool {
        self.end <= self.start && self.len > 0
    }
}

fn normalize_cuts(len: usize, topology: Topology, cuts: &[usize]) -> Vec<usize> {
    let mut cuts: Vec<usize> = match topology {
        Topology::Linear => cuts.iter().map(|&cut| usize::min(cut, len)).collect(),
        Topology::Circular if len > 0 => cuts.iter().map(|&cut| cut % len).collect(),
        Topology::Circular => Vec::new(),
    };

    cuts.sort_unstable();
    cuts.dedup();
    cuts
}

/// Splits a molecule of length `len` at the given cut positions. Linear
/// molecules yield one fragment more than there are cuts, including empty
/// fragments for cuts at either end; circular molecules yield one fragment per
/// cut, or the intact molecule if there are no cuts.
pub fn fragment(len: usize, topology: Topology, cuts: &[usize]) -> Vec<Fragment> {
    let cuts = normalize_cuts(len, topology, cuts);

    match topology {
        Topology::Linear => {
            let mut fragments = Vec::with_capacity(cuts.len() + 1);
            let mut start = 0;
            for &cut in &cuts {
                fragments.push(Fragment::new(start, cut));
                start = cut;
            }

            fragments.push(Fragment::new(start, len));
            fragments
        }
        Topology::Circular => match (cuts.first(), cuts.last()) {
            (Some(&first), Some(&last)) => {
                let mut fragments: Vec<Fragment> = cuts
                    .windows(2)
                    .map(|pair| Fragment::new(pair[0], pair[1]))
                    .collect();

                fragments.push(Fragment::wrapping(last, first, len));
                fragments
            }
            _ => vec![Fragment::new(0, len)],
        },
    }
}

pub fn lengths(fragments: &[Fragment]) -> Vec<usize> {
    fragments.iter().map(|fragment| fragment.len).collect()
}
