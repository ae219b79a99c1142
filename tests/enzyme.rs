extern crate digestr;

use std::collections::HashSet;

use digestr::constants::BUILTIN_ENZYMES;
use digestr::enzyme::{EnzymeCatalog, EnzymeSpec};
use digestr::errors::ErrorKind;

fn rows(values: &[&[&str]]) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect()
}

#[test]
fn test_enzyme_spec() {
    let enzyme = EnzymeSpec::new("EcoRI", b"gaattc", 1).unwrap();

    assert_eq!(enzyme.name(), "EcoRI");
    assert_eq!(enzyme.pattern().as_bytes(), b"GAATTC");
    assert_eq!(enzyme.cut(), 1);
    assert_eq!(enzyme.len(), 6);
    assert_eq!(enzyme.site(), "G^AATTC");
}

#[test]
fn test_enzyme_spec_cut_at_ends() {
    assert_eq!(EnzymeSpec::new("A", b"GATC", 0).unwrap().site(), "^GATC");
    assert_eq!(EnzymeSpec::new("B", b"CATG", 4).unwrap().site(), "CATG^");
}

#[test]
fn test_enzyme_spec_invalid() {
    for (pattern, cut) in &[(&b""[..], 0), (&b"GAATTC"[..], 7), (&b"GAZTTC"[..], 1)] {
        let err = EnzymeSpec::new("Foo", pattern, *cut).unwrap_err();

        match err.kind() {
            ErrorKind::InvalidEnzymeSpec(name, _) => assert_eq!(name, "Foo"),
            kind => panic!("unexpected error {:?}", kind),
        }
    }
}

#[test]
fn test_enzyme_spec_empty_name() {
    assert!(EnzymeSpec::new("", b"GAATTC", 1).is_err());
    assert!(EnzymeSpec::new("  ", b"GAATTC", 1).is_err());
}

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = EnzymeCatalog::builtin().unwrap();
    assert_eq!(catalog.len(), BUILTIN_ENZYMES.len());

    let names: HashSet<_> = catalog.iter().map(|v| v.name().to_ascii_lowercase()).collect();
    assert_eq!(names.len(), catalog.len());

    for &(name, pattern, cut) in BUILTIN_ENZYMES.iter() {
        let enzyme = catalog.get(name).unwrap();

        assert_eq!(enzyme.pattern().as_bytes(), pattern);
        assert_eq!(enzyme.cut(), cut);
    }
}

#[test]
fn test_builtin_catalog_rejects_duplicates() {
    let mut catalog = EnzymeCatalog::builtin().unwrap();
    let err = catalog
        .insert(EnzymeSpec::new("ecori", b"GAATTC", 1).unwrap())
        .unwrap_err();

    match err.kind() {
        ErrorKind::DuplicateEnzyme(name) => assert_eq!(name, "ecori"),
        kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn test_builtin_catalog_lookup() {
    let catalog = EnzymeCatalog::builtin().unwrap();

    assert_eq!(catalog.get("EcoRI").map(|v| v.name()), Some("EcoRI"));
    assert_eq!(catalog.get("ecori").map(|v| v.name()), Some("EcoRI"));
    assert_eq!(catalog.get("ECORI").map(|v| v.name()), Some("EcoRI"));
    assert_eq!(catalog.get("BamHI").map(|v| v.site()), Some("G^GATCC".into()));
    assert_eq!(catalog.get("NlaIII").map(|v| v.site()), Some("CATG^".into()));
}

#[test]
fn test_builtin_catalog_unknown() {
    let catalog = EnzymeCatalog::builtin().unwrap();

    assert_eq!(catalog.get("EcoRX"), None);
    assert_eq!(catalog.get("Cas9"), None);
    assert_eq!(catalog.get(""), None);
}

#[test]
fn test_select_keeps_order_and_drops_repeats() {
    let catalog = EnzymeCatalog::builtin().unwrap();
    let selection = catalog.select(&["BamHI", "ecori", "BAMHI"]).unwrap();
    let names: Vec<&str> = selection.iter().map(|v| v.name()).collect();

    assert_eq!(names, vec!["BamHI", "EcoRI"]);
}

#[test]
fn test_select_unknown() {
    let catalog = EnzymeCatalog::builtin().unwrap();
    let err = catalog.select(&["EcoRI", "Foo"]).unwrap_err();

    match err.kind() {
        ErrorKind::UnknownEnzyme(name) => assert_eq!(name, "Foo"),
        kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn test_catalog_from_rows() {
    let catalog =
        EnzymeCatalog::from_rows(&rows(&[&["Foo", "GAATTC", "1"], &[" Bar ", "ggatcc", " 5 "]]))
            .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("foo").map(|v| v.site()), Some("G^AATTC".into()));
    assert_eq!(catalog.get("bar").map(|v| v.site()), Some("GGATC^C".into()));
    assert_eq!(catalog.get("EcoRI"), None);
}

#[test]
fn test_catalog_from_rows_duplicates() {
    let err = EnzymeCatalog::from_rows(&rows(&[&["Foo", "GAATTC", "1"], &["FOO", "GGATCC", "1"]]))
        .unwrap_err();

    match err.kind() {
        ErrorKind::DuplicateEnzyme(name) => assert_eq!(name, "FOO"),
        kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn test_catalog_from_rows_malformed() {
    let malformed: &[&[&str]] = &[
        &["Foo", "GAATTC"],
        &["Foo", "GAATTC", "1", "extra"],
        &["Foo", "GAATTC", "one"],
        &["Foo", "GAATTC", "-1"],
        &["Foo", "GAATTC", "9"],
    ];

    for row in malformed {
        let err = EnzymeCatalog::from_rows(&rows(&[*row])).unwrap_err();

        match err.kind() {
            ErrorKind::InvalidEnzymeSpec(..) => {}
            kind => panic!("unexpected error {:?} for {:?}", kind, row),
        }
    }
}
