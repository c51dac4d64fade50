/// Greek lowercase and accented letters mapped to their unaccented
/// uppercase forms, per Greek all-caps typography (accents are dropped).
/// Exact single-character lookups, checked in order; both the medial and
/// the final sigma map to the same uppercase sigma.
pub const GREEK_UPPERCASE_MAP: &[(char, char)] = &[
    ('α', 'Α'),
    ('β', 'Β'),
    ('γ', 'Γ'),
    ('δ', 'Δ'),
    ('ε', 'Ε'),
    ('ζ', 'Ζ'),
    ('η', 'Η'),
    ('θ', 'Θ'),
    ('ι', 'Ι'),
    ('κ', 'Κ'),
    ('λ', 'Λ'),
    ('μ', 'Μ'),
    ('ν', 'Ν'),
    ('ξ', 'Ξ'),
    ('ο', 'Ο'),
    ('π', 'Π'),
    ('ρ', 'Ρ'),
    ('σ', 'Σ'),
    ('ς', 'Σ'),
    ('τ', 'Τ'),
    ('υ', 'Υ'),
    ('φ', 'Φ'),
    ('χ', 'Χ'),
    ('ψ', 'Ψ'),
    ('ω', 'Ω'),
    // Accented lowercase vowels lose the accent when uppercased.
    ('ά', 'Α'),
    ('έ', 'Ε'),
    ('ή', 'Η'),
    ('ί', 'Ι'),
    ('ό', 'Ο'),
    ('ύ', 'Υ'),
    ('ώ', 'Ω'),
    ('ΐ', 'Ι'),
    ('ΰ', 'Υ'),
    // Already-uppercase accented vowels also lose the accent.
    ('Ά', 'Α'),
    ('Έ', 'Ε'),
    ('Ή', 'Η'),
    ('Ί', 'Ι'),
    ('Ό', 'Ο'),
    ('Ύ', 'Υ'),
    ('Ώ', 'Ω'),
];

pub fn lookup(ch: char) -> Option<char> {
    GREEK_UPPERCASE_MAP
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::{lookup, GREEK_UPPERCASE_MAP};

    #[test]
    fn every_key_maps_once() {
        for (i, (from, _)) in GREEK_UPPERCASE_MAP.iter().enumerate() {
            let first = GREEK_UPPERCASE_MAP
                .iter()
                .position(|(other, _)| other == from)
                .unwrap();
            assert_eq!(first, i, "duplicate key {:?}", from);
        }
    }

    #[test]
    fn both_sigmas_map_to_capital_sigma() {
        assert_eq!(lookup('σ'), Some('Σ'));
        assert_eq!(lookup('ς'), Some('Σ'));
    }

    #[test]
    fn latin_is_not_mapped() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('A'), None);
    }
}
