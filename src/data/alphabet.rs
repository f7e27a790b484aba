use crate::scoredata::ScoreDataError;

/// A digital alphabet for profile scores.
///
/// Symbols are addressed by their code, the index into [`symbols`]. Codes
/// `0..K` are the canonical residues, code `K` is the gap, and any higher codes
/// are degeneracy or special symbols. `K` is the [`canonical_size`] and the
/// total number of codes `Kp` is the [`size`].
///
/// [`symbols`]: Alphabet::symbols
/// [`canonical_size`]: Alphabet::canonical_size
/// [`size`]: Alphabet::size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols:   &'static [u8],
    canonical: usize,
}

impl Alphabet {
    /// Nucleotides: `ACGT`, the gap, IUPAC degeneracy codes, and the
    /// nonresidue and missing-data symbols.
    pub const DNA: Alphabet = Alphabet {
        symbols:   b"ACGT-RYMKSWHBVDN*~",
        canonical: 4,
    };

    /// The twenty standard amino acids, the gap, the ambiguity codes `BJZ`, the
    /// rare residues `OU`, `X`, and the nonresidue and missing-data symbols.
    pub const AMINO: Alphabet = Alphabet {
        symbols:   b"ACDEFGHIKLMNPQRSTVWY-BJZOUX*~",
        canonical: 20,
    };

    /// Creates a custom alphabet whose first `canonical` symbols are the
    /// concrete residues.
    ///
    /// An alphabet consisting only of canonical symbols is allowed.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::InvalidAlphabet`] is returned if `canonical` is zero,
    /// exceeds the number of symbols, or if there are more than 256 symbols.
    pub fn new(symbols: &'static [u8], canonical: usize) -> Result<Self, ScoreDataError> {
        if canonical == 0 || canonical > symbols.len() || symbols.len() > 256 {
            Err(ScoreDataError::InvalidAlphabet)
        } else {
            Ok(Alphabet { symbols, canonical })
        }
    }

    /// The total number of symbol codes `Kp`, including the gap and degenerate
    /// symbols.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// The number of canonical residues `K`.
    #[inline]
    #[must_use]
    pub fn canonical_size(&self) -> usize {
        self.canonical
    }

    /// Whether `code` is a concrete residue (neither a gap nor degenerate).
    #[inline]
    #[must_use]
    pub fn is_canonical(&self, code: usize) -> bool {
        code < self.canonical
    }

    /// The code of the gap symbol, if the alphabet has one.
    #[inline]
    #[must_use]
    pub fn gap(&self) -> Option<usize> {
        (self.canonical < self.symbols.len()).then_some(self.canonical)
    }

    /// The symbols of the alphabet, indexed by code.
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// The code for `symbol`, ignoring case.
    #[must_use]
    pub fn code_of(&self, symbol: u8) -> Option<usize> {
        let symbol = symbol.to_ascii_uppercase();
        self.symbols.iter().position(|&s| s == symbol)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(Alphabet::DNA.size(), 18);
        assert_eq!(Alphabet::DNA.canonical_size(), 4);
        assert_eq!(Alphabet::DNA.gap(), Some(4));
        assert_eq!(Alphabet::AMINO.size(), 29);
        assert_eq!(Alphabet::AMINO.canonical_size(), 20);
        assert_eq!(Alphabet::AMINO.code_of(b'y'), Some(19));
    }

    #[test]
    fn canonical_codes() {
        let dna = Alphabet::DNA;
        assert!((0..4).all(|x| dna.is_canonical(x)));
        assert!((4..dna.size()).all(|x| !dna.is_canonical(x)));
    }

    #[test]
    fn custom_alphabets() {
        let plain = Alphabet::new(b"ACGT", 4).unwrap();
        assert_eq!(plain.gap(), None);
        assert_eq!(plain.size(), 4);

        assert_eq!(Alphabet::new(b"ACGT", 0), Err(ScoreDataError::InvalidAlphabet));
        assert_eq!(Alphabet::new(b"AC", 3), Err(ScoreDataError::InvalidAlphabet));
    }
}
