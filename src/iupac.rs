const A: u8 = 0b0001;
const C: u8 = 0b0010;
const G: u8 = 0b0100;
const T: u8 = 0b1000;

const MAPPING: [(u8, u8); 15] = [
    (b'A', A),
    (b'C', C),
    (b'G', G),
    (b'T', T),
    (b'R', A | G),
    (b'Y', C | T),
    (b'S', G | C),
    (b'W', A | T),
    (b'K', G | T),
    (b'M', A | C),
    (b'B', C | G | T),
    (b'D', A | G | T),
    (b'H', A | C | T),
    (b'V', A | C | G),
    (b'N', A | C | G | T),
];

lazy_static! {
    // Set of bases denoted by each code; zero for anything that is not a code
    static ref BASES: [u8; 256] = {
        let mut table = [0; 256];

        for &(code, bases) in &MAPPING {
            table[code as usize] = bases;
            table[code.to_ascii_lowercase() as usize] = bases;
        }

        table
    };
}

/// Returns true if `code` is an IUPAC nucleotide code (either case).
pub fn is_code(code: u8) -> bool {
    BASES[code as usize] != 0
}

/// Returns true if every base denoted by `candidate` is permitted by `query`.
///
/// Characters outside the IUPAC alphabet never match anything, so gaps and
/// masked regions in a sequence can not produce a hit.
pub fn matches(query: u8, candidate: u8) -> bool {
    let candidate = BASES[candidate as usize];

    candidate != 0 && candidate & !BASES[query as usize] == 0
}
