use std::borrow::Cow;

use bio::alphabets::dna;

use crate::iupac;

/// Recognition sequence of a restriction enzyme, written 5' to 3' on the top
/// strand using IUPAC nucleotide codes.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pattern: Vec<u8>,
}

impl Pattern {
    pub fn new(query: &[u8]) -> Pattern {
        Pattern {
            pattern: query.to_ascii_uppercase(),
        }
    }

    /// Returns the first character that is not an IUPAC code, if any.
    pub fn invalid_code(&self) -> Option<u8> {
        self.pattern.iter().copied().find(|&nuc| !iupac::is_code(nuc))
    }

    pub fn matches(&self, window: &[u8]) -> bool {
        self.len() <= window.len()
            && self
                .pattern
                .iter()
                .zip(window.iter())
                .all(|(&query, &candidate)| iupac::matches(query, candidate))
    }

    pub fn revcomp(&self) -> Pattern {
        Pattern {
            pattern: dna::revcomp(&self.pattern),
        }
    }

    /// A palindromic site reads the same on both strands, so scanning the
    /// reverse complement finds nothing new.
    pub fn is_palindrome(&self) -> bool {
        self.revcomp() == *self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pattern
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn to_string(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.pattern)
    }
}
