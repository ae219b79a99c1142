/// Extension appended to the output path for the tabular report
pub const CSV_EXTENSION: &str = ".csv";

/// Separator used for list columns in the tabular report
pub const CSV_LIST_SEPARATOR: &str = ";";

// Built-in catalog of common Type II enzymes: (name, recognition site, cut).
// The cut is the 0-based offset within the site after which the top strand
// is cleaved, i.e. G^AATTC is written as 1.
pub const BUILTIN_ENZYMES: [(&str, &[u8], usize); 72] = [
    ("AatII", b"GACGTC", 5),
    ("Acc65I", b"GGTACC", 1),
    ("AccI", b"GTMKAC", 2),
    ("AfeI", b"AGCGCT", 3),
    ("AflII", b"CTTAAG", 1),
    ("AgeI", b"ACCGGT", 1),
    ("AluI", b"AGCT", 2),
    ("ApaI", b"GGGCCC", 5),
    ("ApaLI", b"GTGCAC", 1),
    ("AscI", b"GGCGCGCC", 2),
    ("AvaI", b"CYCGRG", 1),
    ("AvrII", b"CCTAGG", 1),
    ("BamHI", b"GGATCC", 1),
    ("BanI", b"GGYRCC", 1),
    ("BbvCI", b"CCTCAGC", 2),
    ("BclI", b"TGATCA", 1),
    ("BglII", b"AGATCT", 1),
    ("BsrGI", b"TGTACA", 1),
    ("BssHII", b"GCGCGC", 1),
    ("BstYI", b"RGATCY", 1),
    ("ClaI", b"ATCGAT", 2),
    ("DpnII", b"GATC", 0),
    ("DraI", b"TTTAAA", 3),
    ("EagI", b"CGGCCG", 1),
    ("EcoRI", b"GAATTC", 1),
    ("EcoRV", b"GATATC", 3),
    ("FseI", b"GGCCGGCC", 6),
    ("HaeIII", b"GGCC", 2),
    ("HhaI", b"GCGC", 3),
    ("HincII", b"GTYRAC", 3),
    ("HindIII", b"AAGCTT", 1),
    ("HinfI", b"GANTC", 1),
    ("HpaI", b"GTTAAC", 3),
    ("HpaII", b"CCGG", 1),
    ("KpnI", b"GGTACC", 5),
    ("MboI", b"GATC", 0),
    ("MfeI", b"CAATTG", 1),
    ("MluI", b"ACGCGT", 1),
    ("MspI", b"CCGG", 1),
    ("NcoI", b"CCATGG", 1),
    ("NdeI", b"CATATG", 2),
    ("NheI", b"GCTAGC", 1),
    ("NlaIII", b"CATG", 4),
    ("NotI", b"GCGGCCGC", 2),
    ("NruI", b"TCGCGA", 3),
    ("NsiI", b"ATGCAT", 5),
    ("PacI", b"TTAATTAA", 5),
    ("PmeI", b"GTTTAAAC", 4),
    ("PstI", b"CTGCAG", 5),
    ("PvuI", b"CGATCG", 4),
    ("PvuII", b"CAGCTG", 3),
    ("RsaI", b"GTAC", 2),
    ("SacI", b"GAGCTC", 5),
    ("SacII", b"CCGCGG", 4),
    ("SalI", b"GTCGAC", 1),
    ("Sau3AI", b"GATC", 0),
    ("Sau96I", b"GGNCC", 1),
    ("ScaI", b"AGTACT", 3),
    ("SfiI", b"GGCCNNNNNGGCC", 8),
    ("SmaI", b"CCCGGG", 3),
    ("SnaBI", b"TACGTA", 3),
    ("SpeI", b"ACTAGT", 1),
    ("SphI", b"GCATGC", 5),
    ("SspI", b"AATATT", 3),
    ("StuI", b"AGGCCT", 3),
    ("StyI", b"CCWWGG", 1),
    ("SwaI", b"ATTTAAAT", 4),
    ("TaqI", b"TCGA", 1),
    ("XbaI", b"TCTAGA", 1),
    ("XhoI", b"CTCGAG", 1),
    ("XmaI", b"CCCGGG", 1),
    ("ZraI", b"GACGTC", 3),
];
