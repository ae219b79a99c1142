extern crate bio_types;
extern crate digestr;

use bio_types::strand::Strand;

use digestr::cut::{resolve_cut, resolve_cuts};
use digestr::enzyme::EnzymeSpec;
use digestr::sequence::Topology;
use digestr::site::RestrictionSite;

fn site(enzyme: &EnzymeSpec, start: usize, strand: Strand) -> RestrictionSite {
    RestrictionSite {
        enzyme,
        start,
        strand,
    }
}

#[test]
fn test_forward_cut() {
    let enzyme = EnzymeSpec::new("EcoRI", b"GAATTC", 1).unwrap();

    assert_eq!(resolve_cut(&site(&enzyme, 0, Strand::Forward), 6, Topology::Linear), 1);
    assert_eq!(resolve_cut(&site(&enzyme, 4, Strand::Forward), 12, Topology::Linear), 5);
}

#[test]
fn test_reverse_cut_is_mirrored() {
    let enzyme = EnzymeSpec::new("BbvCI", b"CCTCAGC", 2).unwrap();

    assert_eq!(resolve_cut(&site(&enzyme, 2, Strand::Reverse), 11, Topology::Linear), 7);
    assert_eq!(resolve_cut(&site(&enzyme, 2, Strand::Forward), 11, Topology::Linear), 4);
}

#[test]
fn test_cut_at_site_boundaries() {
    let head = EnzymeSpec::new("DpnII", b"GATC", 0).unwrap();
    let tail = EnzymeSpec::new("NlaIII", b"CATG", 4).unwrap();

    assert_eq!(resolve_cut(&site(&head, 3, Strand::Forward), 10, Topology::Linear), 3);
    assert_eq!(resolve_cut(&site(&head, 3, Strand::Reverse), 10, Topology::Linear), 7);
    assert_eq!(resolve_cut(&site(&tail, 6, Strand::Forward), 10, Topology::Linear), 10);
    assert_eq!(resolve_cut(&site(&tail, 6, Strand::Reverse), 10, Topology::Linear), 6);
}

#[test]
fn test_circular_cut_wraps() {
    let enzyme = EnzymeSpec::new("Foo", b"GAATTC", 6).unwrap();

    assert_eq!(resolve_cut(&site(&enzyme, 8, Strand::Forward), 12, Topology::Circular), 2);
    assert_eq!(resolve_cut(&site(&enzyme, 6, Strand::Forward), 12, Topology::Circular), 0);
}

#[test]
fn test_linear_cut_is_clamped() {
    let enzyme = EnzymeSpec::new("Foo", b"GAATTC", 6).unwrap();

    assert_eq!(resolve_cut(&site(&enzyme, 8, Strand::Forward), 12, Topology::Linear), 12);
}

#[test]
fn test_cuts_are_sorted() {
    let enzyme = EnzymeSpec::new("EcoRI", b"GAATTC", 1).unwrap();
    let sites = vec![
        site(&enzyme, 6, Strand::Forward),
        site(&enzyme, 0, Strand::Forward),
    ];

    assert_eq!(resolve_cuts(&sites, 12, Topology::Circular), vec![1, 7]);
}

#[test]
fn test_cuts_are_unique() {
    let forward = EnzymeSpec::new("Foo", b"GAATTC", 1).unwrap();
    let reverse = EnzymeSpec::new("Bar", b"GAATTC", 5).unwrap();
    let sites = vec![
        site(&forward, 0, Strand::Forward),
        site(&reverse, 0, Strand::Reverse),
        site(&forward, 0, Strand::Forward),
    ];

    assert_eq!(resolve_cuts(&sites, 6, Topology::Linear), vec![1]);
}

#[test]
fn test_no_sites_no_cuts() {
    assert_eq!(resolve_cuts(&[], 10, Topology::Linear), Vec::<usize>::new());
    assert_eq!(resolve_cuts(&[], 0, Topology::Circular), Vec::<usize>::new());
}
