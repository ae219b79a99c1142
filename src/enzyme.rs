use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;

use crate::constants::BUILTIN_ENZYMES;
use crate::errors::*;
use crate::pattern::Pattern;
use crate::table;

#[derive(Clone, Debug, PartialEq)]
pub struct EnzymeSpec {
    name: String,
    pattern: Pattern,
    cut: usize,
}

impl EnzymeSpec {
    /// Builds a validated enzyme; `cut` is the offset within `pattern` after
    /// which the top strand is cleaved, and must lie in `[0, pattern length]`.
    pub fn new(name: &str, pattern: &[u8], cut: usize) -> Result<EnzymeSpec> {
        let invalid = |reason: String| ErrorKind::InvalidEnzymeSpec(name.into(), reason);
        let pattern = Pattern::new(pattern);

        if name.trim().is_empty() {
            return Err(invalid("enzyme name is empty".into()).into());
        } else if pattern.is_empty() {
            return Err(invalid("recognition site is empty".into()).into());
        } else if let Some(nuc) = pattern.invalid_code() {
            return Err(invalid(format!(
                "recognition site contains non-IUPAC character {:?}",
                nuc as char
            ))
            .into());
        } else if cut > pattern.len() {
            return Err(invalid(format!(
                "cut offset {} is outside of recognition site {}",
                cut,
                pattern.to_string()
            ))
            .into());
        }

        Ok(EnzymeSpec {
            name: name.into(),
            pattern,
            cut,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn cut(&self) -> usize {
        self.cut
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Recognition site with the top-strand cut marked, e.g. `G^AATTC`.
    pub fn site(&self) -> String {
        let pattern = self.pattern.to_string();

        format!("{}^{}", &pattern[..self.cut], &pattern[self.cut..])
    }
}

/// Ordered set of enzymes with case-insensitive lookup by name.
#[derive(Clone, Debug, Default)]
pub struct EnzymeCatalog {
    enzymes: Vec<EnzymeSpec>,
    names: HashMap<String, usize>,
}

impl EnzymeCatalog {
    pub fn new() -> EnzymeCatalog {
        Default::default()
    }

    pub fn builtin() -> Result<EnzymeCatalog> {
        let mut catalog = Self::new();
        for &(name, pattern, cut) in BUILTIN_ENZYMES.iter() {
            catalog.insert(EnzymeSpec::new(name, pattern, cut)?)?;
        }

        Ok(catalog)
    }

    /// Builds a catalog from `[name, pattern, cut]` rows.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<EnzymeCatalog> {
        let mut catalog = Self::new();
        for row in rows {
            let (name, pattern, cut) = match row.as_slice() {
                [name, pattern, cut] => (name.trim(), pattern.trim(), cut.trim()),
                _ => {
                    let name = row.first().map(|v| v.as_str()).unwrap_or("");
                    let reason = format!("expected 3 columns (name, site, cut), found {}", row.len());

                    return Err(ErrorKind::InvalidEnzymeSpec(name.into(), reason).into());
                }
            };

            let cut = match usize::from_str_radix(cut, 10) {
                Ok(v) => v,
                Err(err) => {
                    let reason = format!("invalid cut offset {:?}: {}", cut, err);

                    return Err(ErrorKind::InvalidEnzymeSpec(name.into(), reason).into());
                }
            };

            catalog.insert(EnzymeSpec::new(name, pattern.as_bytes(), cut)?)?;
        }

        Ok(catalog)
    }

    /// Reads a tab-separated catalog of `name`, `site` and `cut` columns.
    pub fn read<P: AsRef<Path> + Debug>(filename: &P) -> Result<EnzymeCatalog> {
        let rows = table::read(filename)
            .chain_err(|| format!("failed to read enzyme catalog {:?}", filename))?;

        Self::from_rows(&rows).chain_err(|| format!("invalid enzyme catalog {:?}", filename))
    }

    pub fn insert(&mut self, enzyme: EnzymeSpec) -> Result<()> {
        let key = enzyme.name().to_ascii_lowercase();
        if self.names.contains_key(&key) {
            return Err(ErrorKind::DuplicateEnzyme(enzyme.name().into()).into());
        }

        self.enzymes.push(enzyme);
        self.names.insert(key, self.enzymes.len() - 1);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&EnzymeSpec> {
        self.names
            .get(&name.to_ascii_lowercase())
            .map(|&idx| &self.enzymes[idx])
    }

    /// Looks up enzymes in the order given; names listed more than once are
    /// only included the first time.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<EnzymeSpec>> {
        let mut selection: Vec<EnzymeSpec> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let enzyme = match self.get(name) {
                Some(enzyme) => enzyme,
                None => return Err(ErrorKind::UnknownEnzyme(name.into()).into()),
            };

            if !selection.iter().any(|v| v.name() == enzyme.name()) {
                selection.push(enzyme.clone());
            }
        }

        Ok(selection)
    }

    pub fn iter(&self) -> std::slice::Iter<EnzymeSpec> {
        self.enzymes.iter()
    }

    pub fn enzymes(&self) -> &[EnzymeSpec] {
        &self.enzymes
    }

    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }
}
