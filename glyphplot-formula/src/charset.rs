//! The fixed character-to-display-name table.
//!
//! Display names label the emitted `S_{..cx}`/`S_{..cy}`/`L_{..}`
//! definitions, so they are restricted to characters a grapher accepts in
//! subscripts: digits and letters map to themselves, punctuation gets a
//! fixed mnemonic. The table is configuration, not font data, and its
//! order fixes the output order of a batch run.

/// Punctuation block of the table, in emission order.
const PUNCTUATION: &[(char, &str)] = &[
    ('~', "Grave"),
    ('`', "Tick"),
    ('1', "1"),
    ('2', "2"),
    ('3', "3"),
    ('4', "4"),
    ('5', "5"),
    ('6', "6"),
    ('7', "7"),
    ('8', "8"),
    ('9', "9"),
    ('0', "0"),
    ('!', "Excl"),
    ('@', "At"),
    ('#', "Pound"),
    ('$', "Dollar"),
    ('%', "Percent"),
    ('^', "Carrot"),
    ('&', "Amp"),
    ('*', "Ast"),
    ('(', "OPar"),
    (')', "CPar"),
    ('_', "Under"),
    ('-', "Minus"),
    ('+', "Plus"),
    ('=', "Equals"),
    ('{', "OCur"),
    ('}', "CCur"),
    ('[', "OSqr"),
    (']', "CSqr"),
    ('|', "Pipe"),
    ('\\', "BSlash"),
    (':', "Colon"),
    (';', "Semi"),
    ('"', "DQuo"),
    ('\'', "SQuo"),
    ('<', "Lt"),
    ('>', "Gt"),
    ('?', "Ques"),
    (',', "Comma"),
    ('.', "Period"),
    ('/', "Slash"),
];

/// The full table in emission order: punctuation and digits first, then
/// `a..=z`, then `A..=Z`.
#[must_use]
pub fn character_table() -> Vec<(char, String)> {
    let mut table: Vec<(char, String)> = PUNCTUATION
        .iter()
        .map(|&(ch, name)| (ch, name.to_owned()))
        .collect();
    for ch in 'a'..='z' {
        table.push((ch, ch.to_string()));
    }
    for ch in 'A'..='Z' {
        table.push((ch, ch.to_string()));
    }
    table
}

/// Display name for a single character, if it is in the table.
#[must_use]
pub fn display_name(ch: char) -> Option<String> {
    if ch.is_ascii_alphabetic() {
        return Some(ch.to_string());
    }
    PUNCTUATION
        .iter()
        .find(|&&(c, _)| c == ch)
        .map(|&(_, name)| name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_punctuation_digits_and_letters() {
        let table = character_table();
        assert_eq!(table.len(), PUNCTUATION.len() + 52);
    }

    #[test]
    fn table_order_is_fixed() {
        let table = character_table();
        assert_eq!(table[0], ('~', "Grave".to_owned()));
        assert_eq!(table[1], ('`', "Tick".to_owned()));
        // Letters follow the punctuation block.
        assert_eq!(table[PUNCTUATION.len()], ('a', "a".to_owned()));
        let last = table.last().cloned();
        assert_eq!(last, Some(('Z', "Z".to_owned())));
    }

    #[test]
    fn names_are_subscript_safe() {
        for (_, name) in character_table() {
            assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric()),
                "unsafe name {name}"
            );
        }
    }

    #[test]
    fn display_name_lookup() {
        assert_eq!(display_name('!').as_deref(), Some("Excl"));
        assert_eq!(display_name('g').as_deref(), Some("g"));
        assert_eq!(display_name('Q').as_deref(), Some("Q"));
        assert_eq!(display_name(' '), None);
        assert_eq!(display_name('\u{e9}'), None);
    }
}
