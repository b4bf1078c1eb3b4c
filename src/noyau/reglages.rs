//! src/noyau/reglages.rs
//!
//! Réglages du noyau (délai de l’état "Error", précision d’arrondi).
//!
//! Contrats :
//! - Valeurs par défaut = comportement de référence (800 ms, 12 décimales).
//! - Défense en profondeur : les setters bornent les valeurs.

use std::time::Duration;

/// Durée de vie de l’affichage "Error" avant remise à vide.
const DELAI_ERREUR_DEFAUT: Duration = Duration::from_millis(800);

/// Garde-fou : au-delà, l’écran resterait bloqué sur "Error".
pub const DELAI_ERREUR_MAX: Duration = Duration::from_secs(10);

/// Décimales conservées après évaluation (anti-bruit binaire).
const CHIFFRES_DEFAUT: i32 = 12;

/// Un f64 ne porte pas plus de ~15-17 chiffres significatifs.
pub const CHIFFRES_MAX: i32 = 15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reglages {
    pub delai_erreur: Duration,
    pub chiffres: i32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            delai_erreur: DELAI_ERREUR_DEFAUT,
            chiffres: CHIFFRES_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn set_delai_erreur(&mut self, delai: Duration) {
        self.delai_erreur = delai.min(DELAI_ERREUR_MAX);
    }

    pub fn set_chiffres(&mut self, chiffres: i32) {
        self.chiffres = chiffres.clamp(0, CHIFFRES_MAX);
    }
}
