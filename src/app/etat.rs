//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’éditeur du noyau et offrir les deux portes d’entrée
//! (bouton, touche clavier), sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (tout passe par `Editeur`).
//! - Actions déterministes : le temps est fourni par l’appelant.

use std::time::Duration;

use crate::noyau::{depuis_touche, Editeur, Entree, Reglages};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub editeur: Editeur,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            editeur: Editeur::new(reglages),
        }
    }

    /// Bouton cliqué (ou touche déjà traduite).
    pub fn entree(&mut self, entree: Entree, maintenant: f64) {
        self.editeur.traiter(entree, maintenant);
    }

    /// Précision d’arrondi (bornée par `Reglages`).
    pub fn set_chiffres(&mut self, chiffres: i32) {
        let mut r = self.editeur.reglages();
        r.set_chiffres(chiffres);
        self.editeur.set_reglages(r);
    }

    /// Durée d’affichage de "Error" (bornée par `Reglages`).
    pub fn set_delai_erreur(&mut self, delai: Duration) {
        let mut r = self.editeur.reglages();
        r.set_delai_erreur(delai);
        self.editeur.set_reglages(r);
    }

    /// Touche clavier brute. Retourne false si la touche n’est pas gérée.
    pub fn touche(&mut self, nom: &str, maintenant: f64) -> bool {
        match depuis_touche(nom) {
            Some(e) => {
                self.entree(e, maintenant);
                true
            }
            None => false,
        }
    }
}
