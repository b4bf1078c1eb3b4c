// src/noyau/erreur.rs
//
// Taxonomie des échecs d’évaluation.
// Côté UI, les trois cas se confondent en un seul affichage "Error".

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Un caractère hors liste blanche après traduction des glyphes.
    #[error("caractères invalides")]
    CaracteresInvalides,

    /// L’expression canonique commence par `*` ou `/`.
    #[error("expression malformée")]
    ExpressionMalformee,

    /// Syntaxe refusée par l’évaluateur, ou résultat non fini (NaN, ±inf).
    #[error("erreur de calcul: {0}")]
    Calcul(String),
}

impl ErreurEval {
    pub fn calcul(cause: impl Into<String>) -> Self {
        Self::Calcul(cause.into())
    }
}
