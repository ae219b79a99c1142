use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::Path;

use bio::io::fasta::Reader;

use crate::errors::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Linear,
    Circular,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Topology::Linear => write!(f, "linear"),
            Topology::Circular => write!(f, "circular"),
        }
    }
}

/// A named DNA molecule. Bases are stored in uppercase; anything outside the
/// IUPAC alphabet is kept as-is and simply never matches a recognition site.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    id: String,
    seq: Vec<u8>,
    topology: Topology,
}

impl Sequence {
    pub fn new(id: &str, seq: &[u8], topology: Topology) -> Sequence {
        Sequence {
            id: id.to_owned(),
            seq: seq.to_ascii_uppercase(),
            topology,
        }
    }

    pub fn linear(id: &str, seq: &[u8]) -> Sequence {
        Self::new(id, seq, Topology::Linear)
    }

    pub fn circular(id: &str, seq: &[u8]) -> Sequence {
        Self::new(id, seq, Topology::Circular)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

pub fn from_reader<R: io::Read>(reader: R, topology: Topology) -> Result<Vec<Sequence>> {
    let mut sequences = Vec::new();
    for record in Reader::new(reader).records() {
        let record = record.chain_err(|| "failed to read FASTA sequence")?;
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;

        sequences.push(Sequence::new(record.id(), record.seq(), topology));
    }

    Ok(sequences)
}

pub fn read_fasta<P: AsRef<Path> + Debug>(filename: &P, topology: Topology) -> Result<Vec<Sequence>> {
    let file = std::fs::File::open(filename)
        .chain_err(|| format!("failed to open FASTA file {:?}", filename))?;

    from_reader(file, topology).chain_err(|| format!("failed to parse FASTA file {:?}", filename))
}
