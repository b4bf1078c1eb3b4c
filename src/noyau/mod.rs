//! Noyau de la calculatrice à glyphes
//!
//! Organisation interne :
//! - glyphes.rs  : ×, ÷, − <-> *, /, -
//! - jetons.rs   : tokenisation (notation canonique)
//! - rpn.rs      : shunting-yard + évaluation de la RPN (f64)
//! - arrondi.rs  : arrondi 12 décimales + texte du résultat
//! - erreur.rs   : taxonomie des échecs
//! - eval.rs     : pipeline complet (liste blanche, garde-fous)
//! - tampon.rs   : expression visible + règle du point unique
//! - clavier.rs  : entrées discrètes + correspondance clavier
//! - editeur.rs  : état de l’éditeur, sentinelle "Error", remise à vide
//! - reglages.rs : délai d’erreur, précision

pub mod arrondi;
pub mod clavier;
pub mod editeur;
pub mod erreur;
pub mod eval;
pub mod glyphes;
pub mod jetons;
pub mod reglages;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use clavier::{depuis_touche, Entree};
pub use editeur::Editeur;
pub use reglages::Reglages;
