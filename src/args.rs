use clap::{App, Arg, ArgMatches, SubCommand};

use crate::errors::*;
use crate::sequence::Topology;

#[derive(Debug)]
pub struct DigestArgs {
    pub fasta: String,
    pub output: Option<String>,
    pub enzymes: Vec<String>,
    pub enzyme_list: Option<String>,
    pub catalog: Option<String>,
    pub topology: Topology,
    pub verbose: bool,
    pub threads: usize,
}

#[derive(Debug)]
pub struct EnzymesArgs {
    pub catalog: Option<String>,
}

pub enum Args {
    Digest(DigestArgs),
    Enzymes(EnzymesArgs),
    None,
}

fn catalog_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("catalog")
        .long("catalog")
        .takes_value(true)
        .help(
            "Tab-separated table of enzymes (name, recognition site, and cut offset) \
             used instead of the built-in catalog.",
        )
}

fn digest_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("digest")
        .about("Digest sequences in FASTA format with restriction enzymes")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing one or more sequences.")
                .required(true),
        )
        .arg(Arg::with_name("output").help(
            "Report is written to this file and a table to '<output>.csv'; \
             the report is written to STDOUT if not set.",
        ))
        .arg(
            Arg::with_name("enzyme")
                .long("enzyme")
                .short("e")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Name of restriction enzyme; may be specified multiple times."),
        )
        .arg(
            Arg::with_name("enzymes")
                .long("enzymes")
                .takes_value(true)
                .help(
                    "File containing names of restriction enzymes, separated by commas \
                     or whitespace. All enzymes in the catalog are used if no enzymes \
                     are specified.",
                ),
        )
        .arg(catalog_arg())
        .arg(
            Arg::with_name("circular")
                .long("circular")
                .short("c")
                .help("Sequences are circular, e.g. plasmids."),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Print number of sequences and restriction enzymes used."),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
}

fn enzymes_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("enzymes")
        .about("Print table of available restriction enzymes")
        .arg(catalog_arg())
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn get_optional(matches: &ArgMatches, key: &str) -> Option<String> {
    matches.value_of(key).map(|s| s.to_string())
}

fn parse_threads(matches: &ArgMatches) -> Result<usize> {
    let s = get_str(matches, "threads")?;

    match usize::from_str_radix(s, 10) {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --threads ({:?}) value: {}", s, err).into()),
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("digestr")
        .version("0.1.0")
        .author("Mikkel Schubert")
        .about("In-silico restriction digest of DNA sequences")
        .subcommand(digest_command())
        .subcommand(enzymes_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("digest") {
        let enzymes = match matches.values_of("enzyme") {
            Some(values) => values.map(|v| v.to_string()).collect(),
            None => Vec::new(),
        };

        let topology = if matches.is_present("circular") {
            Topology::Circular
        } else {
            Topology::Linear
        };

        Ok(Args::Digest(DigestArgs {
            fasta: get_string(matches, "fasta")?,
            output: get_optional(matches, "output"),
            enzymes,
            enzyme_list: get_optional(matches, "enzymes"),
            catalog: get_optional(matches, "catalog"),
            topology,
            verbose: matches.is_present("verbose"),
            threads: parse_threads(matches)?,
        }))
    } else if let Some(matches) = matches.subcommand_matches("enzymes") {
        Ok(Args::Enzymes(EnzymesArgs {
            catalog: get_optional(matches, "catalog"),
        }))
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}
