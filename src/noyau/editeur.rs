//! src/noyau/editeur.rs
//!
//! État de l’éditeur (un seul propriétaire, passé explicitement à la vue).
//!
//! Rôle : relier les entrées (boutons / clavier) au tampon et à l’évaluateur,
//! puis exposer l’affichage comme une PROJECTION pure de l’état.
//!
//! Contrats :
//! - Chaque entrée s’exécute entièrement (pas de suspension).
//! - Un échec d’évaluation affiche "Error" puis planifie une remise à vide.
//! - La remise à vide est liée à une génération : toute entrée plus récente
//!   l’invalide (pas d’effacement surprise de ce que l’utilisateur tape ensuite).
//! - Le temps est fourni par l’appelant (secondes, horloge monotone).

use std::time::Duration;

use tracing::{debug, info};

use super::arrondi::format_resultat;
use super::clavier::Entree;
use super::erreur::ErreurEval;
use super::eval::evaluate_avec;
use super::reglages::Reglages;
use super::tampon::Tampon;

/// Texte placé dans le tampon quand l’évaluation échoue.
pub const SENTINELLE_ERREUR: &str = "Error";

/// Remise à vide différée, valable pour UNE génération.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReinitPlanifiee {
    pub echeance: f64,
    pub generation: u64,
}

/// Ce que la vue doit afficher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    /// Expression, ou "0" si vide.
    pub valeur: String,
    /// Expression brute (vide comprise).
    pub apercu: String,
}

#[derive(Clone, Debug, Default)]
pub struct Editeur {
    tampon: Tampon,
    reglages: Reglages,
    generation: u64,
    reinit: Option<ReinitPlanifiee>,
}

impl Editeur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /// Aiguille une entrée vers l’opération correspondante.
    pub fn traiter(&mut self, entree: Entree, maintenant: f64) {
        match entree {
            Entree::Jeton(c) => self.append(c),
            Entree::Retour => self.backspace(),
            Entree::Effacer => self.clear(),
            Entree::Evaluer => {
                // l’échec est déjà traduit en "Error" dans le tampon (et journalisé)
                self.evaluer(maintenant).ok();
            }
        }
    }

    pub fn append(&mut self, jeton: char) {
        self.nouvelle_operation();
        if !self.tampon.append(jeton) {
            debug!(%jeton, "point ignoré (déjà présent dans le nombre)");
        }
    }

    pub fn backspace(&mut self) {
        self.nouvelle_operation();
        self.tampon.backspace();
    }

    pub fn clear(&mut self) {
        self.nouvelle_operation();
        self.tampon.clear();
    }

    pub fn reglages(&self) -> Reglages {
        self.reglages
    }

    /// Nouveaux réglages : valent pour les évaluations suivantes.
    /// Une remise à vide déjà planifiée garde son échéance.
    pub fn set_reglages(&mut self, reglages: Reglages) {
        debug!(?reglages, "réglages");
        self.reglages = reglages;
    }

    /// Évalue l’expression courante.
    ///
    /// Succès : le tampon devient le texte du résultat.
    /// Échec : le tampon devient "Error" et une remise à vide est planifiée
    /// à `maintenant + delai_erreur`. L’erreur est renvoyée pour le journal / les tests,
    /// l’UI ne la détaille jamais.
    pub fn evaluer(&mut self, maintenant: f64) -> Result<f64, ErreurEval> {
        self.nouvelle_operation();

        match evaluate_avec(self.tampon.texte_brut(), &self.reglages) {
            Ok(v) => {
                let texte = format_resultat(v);
                info!(expression = %self.tampon.texte_brut(), resultat = %texte, "évaluation");
                self.tampon.remplacer(texte);
                Ok(v)
            }
            Err(e) => {
                debug!(expression = %self.tampon.texte_brut(), erreur = %e, "évaluation refusée");
                self.tampon.remplacer(SENTINELLE_ERREUR);
                self.reinit = Some(ReinitPlanifiee {
                    echeance: maintenant + self.reglages.delai_erreur.as_secs_f64(),
                    generation: self.generation,
                });
                Err(e)
            }
        }
    }

    /// À appeler à chaque image : déclenche la remise à vide si elle est due.
    /// Retourne true si le tampon a été vidé.
    pub fn tick(&mut self, maintenant: f64) -> bool {
        let Some(r) = self.reinit else {
            return false;
        };
        if maintenant < r.echeance {
            return false;
        }

        self.reinit = None;
        if r.generation != self.generation {
            // périmée : une entrée plus récente est passée entre-temps
            return false;
        }
        self.tampon.clear();
        true
    }

    /// Délai avant la prochaine remise à vide (None si rien d’actif).
    pub fn prochaine_echeance(&self, maintenant: f64) -> Option<Duration> {
        self.reinit_active()
            .map(|r| Duration::from_secs_f64((r.echeance - maintenant).max(0.0)))
    }

    /// Vrai tant que "Error" est affiché et que sa remise à vide est en attente.
    pub fn erreur_affichee(&self) -> bool {
        self.reinit_active().is_some()
    }

    /// Projection pure de l’état vers la vue.
    pub fn affichage(&self) -> Affichage {
        Affichage {
            valeur: self.tampon.current_text().to_string(),
            apercu: self.tampon.texte_brut().to_string(),
        }
    }

    fn reinit_active(&self) -> Option<ReinitPlanifiee> {
        self.reinit.filter(|r| r.generation == self.generation)
    }

    /// Nouvelle génération : périme toute remise à vide en attente.
    /// La sentinelle "Error" n’est pas une expression : on repart de vide.
    fn nouvelle_operation(&mut self) {
        if self.erreur_affichee() {
            self.tampon.clear();
        }
        self.generation = self.generation.wrapping_add(1);
    }
}
