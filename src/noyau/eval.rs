//! Noyau — évaluation (pipeline réel)
//!
//! visible -> canonique -> liste blanche -> opérateur de tête
//!         -> jetons -> RPN -> valeur f64 -> fini ? -> arrondi
//!
//! Remarque : aucune évaluation “dynamique” de texte ; seule la grammaire
//! nombres / + - * / / parenthèses est comprise.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::arrondi::arrondir;
use super::erreur::ErreurEval;
use super::glyphes::vers_canonique;
use super::jetons::{format_tokens, tokenize};
use super::reglages::Reglages;
use super::rpn::{eval_rpn, format_rpn, to_rpn};

/// Caractères admis dans l’expression canonique (ancrée aux deux bouts).
const MOTIF_LISTE_BLANCHE: &str = r"^[0-9+\-*/().\s]*$";

static LISTE_BLANCHE: OnceLock<Regex> = OnceLock::new();

fn liste_blanche() -> &'static Regex {
    LISTE_BLANCHE.get_or_init(|| Regex::new(MOTIF_LISTE_BLANCHE).expect("motif liste blanche"))
}

/// Réglages par défaut (tests : scénarios, fuzz).
#[cfg(test)]
pub fn evaluate(visible: &str) -> Result<f64, ErreurEval> {
    evaluate_avec(visible, &Reglages::default())
}

/// Évalue une expression visible (glyphes ×, ÷, −) et retourne la valeur arrondie.
///
/// Erreurs :
/// - `CaracteresInvalides` : un caractère hors `[0-9+\-*/().\s]` après traduction
/// - `ExpressionMalformee` : l’expression canonique commence par `*` ou `/`
/// - `Calcul` : syntaxe refusée (vide compris) ou résultat non fini
pub fn evaluate_avec(visible: &str, reglages: &Reglages) -> Result<f64, ErreurEval> {
    // 1) Traduction
    let canonique = vers_canonique(visible);

    // 2) Liste blanche
    if !liste_blanche().is_match(&canonique) {
        return Err(ErreurEval::CaracteresInvalides);
    }

    // 3) Opérateur de tête (+ et - restent admis : unaires)
    if canonique.starts_with(['*', '/']) {
        return Err(ErreurEval::ExpressionMalformee);
    }

    // 4) Jetons -> RPN -> valeur
    let jetons = tokenize(&canonique)?;
    let rpn = to_rpn(&jetons)?;
    debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_rpn(&rpn),
        "expression compilée"
    );
    let brut = eval_rpn(&rpn)?;

    // 5) Résultat numérique
    if !brut.is_finite() {
        return Err(ErreurEval::calcul(format!("résultat non fini ({brut})")));
    }
    Ok(arrondir(brut, reglages.chiffres))
}
