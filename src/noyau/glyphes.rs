// src/noyau/glyphes.rs
//
// Glyphes “humains” (×, ÷, −) <-> opérateurs canoniques (*, /, -).
// Le `+` est identique dans les deux notations.

pub const MULT: char = '×';
pub const DIV: char = '÷';
pub const MOINS: char = '−';
pub const PLUS: char = '+';

/// Traduit l’expression visible en notation canonique.
/// Tout autre caractère passe tel quel (la liste blanche tranchera ensuite).
pub fn vers_canonique(visible: &str) -> String {
    visible
        .chars()
        .map(|c| match c {
            MULT => '*',
            DIV => '/',
            MOINS => '-',
            autre => autre,
        })
        .collect()
}

/// Vrai pour les glyphes d’opérateur de la notation visible.
pub fn est_operateur(c: char) -> bool {
    matches!(c, MULT | DIV | MOINS | PLUS)
}
