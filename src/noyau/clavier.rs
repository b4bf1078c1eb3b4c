// src/noyau/clavier.rs
//
// Entrées discrètes (boutons + clavier) et correspondance touche -> entrée.
// Le clavier tape des opérateurs ASCII ; on les convertit en glyphes visibles.

use super::glyphes::{DIV, MOINS, MULT, PLUS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entree {
    /// Chiffre, point, glyphe d’opérateur ou parenthèse.
    Jeton(char),
    /// C : vide l’expression.
    Effacer,
    /// DEL : retire le dernier caractère.
    Retour,
    /// = : évalue.
    Evaluer,
}

/// Nom de touche (caractère tapé ou touche nommée) -> entrée.
/// Retourne None pour toute touche non gérée.
pub fn depuis_touche(touche: &str) -> Option<Entree> {
    match touche {
        "Enter" | "=" => return Some(Entree::Evaluer),
        "Backspace" => return Some(Entree::Retour),
        "Escape" | "Delete" | "c" | "C" => return Some(Entree::Effacer),
        _ => {}
    }

    let mut it = touche.chars();
    let (Some(c), None) = (it.next(), it.next()) else {
        return None;
    };

    let jeton = match c {
        '0'..='9' | '.' | '(' | ')' => c,
        '/' | DIV => DIV,
        '*' | MULT => MULT,
        '-' | MOINS => MOINS,
        PLUS => PLUS,
        _ => return None,
    };
    Some(Entree::Jeton(jeton))
}
