//! src/noyau/tampon.rs
//!
//! Tampon d’entrée : l’expression VISIBLE (glyphes ×, ÷, −).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de jetons, pas de RPN).
//! - Un seul point décimal par “morceau de nombre”.
//! - Rien d’autre n’est validé à la saisie (opérateurs consécutifs,
//!   parenthèses, opérateur en tête) : c’est l’évaluation qui tranche.

/// Texte affiché à la place d’une expression vide.
pub const AFFICHAGE_VIDE: &str = "0";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tampon {
    texte: String,
}

impl Tampon {
    /// Ajoute un caractère (chiffre, point, glyphe, parenthèse).
    /// Un `.` est ignoré si le morceau de nombre courant en contient déjà un.
    ///
    /// Retourne false si l’ajout a été ignoré.
    pub fn append(&mut self, jeton: char) -> bool {
        if jeton == '.' && self.morceau_courant().contains('.') {
            return false;
        }
        self.texte.push(jeton);
        true
    }

    /// Retire le dernier caractère (un glyphe entier). Sans effet si vide.
    pub fn backspace(&mut self) {
        self.texte.pop();
    }

    pub fn clear(&mut self) {
        self.texte.clear();
    }

    /// Remplace tout le contenu (résultat d’évaluation, sentinelle "Error").
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
    }

    /// Texte pour la vue “valeur” : "0" quand l’expression est vide.
    pub fn current_text(&self) -> &str {
        if self.texte.is_empty() {
            AFFICHAGE_VIDE
        } else {
            &self.texte
        }
    }

    /// Texte brut (vue “aperçu”), vide compris.
    pub fn texte_brut(&self) -> &str {
        &self.texte
    }

    /// Morceau de nombre courant : ce qui suit le dernier caractère
    /// qui n’est ni un chiffre ASCII ni un point.
    fn morceau_courant(&self) -> &str {
        match self
            .texte
            .char_indices()
            .rev()
            .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        {
            Some((i, c)) => &self.texte[i + c.len_utf8()..],
            None => &self.texte,
        }
    }
}
