//! Tests de scénarios : séquences d’entrées complètes (boutons / clavier),
//! de la saisie jusqu’à l’affichage.
//!
//! Chaque scénario rejoue ce que ferait la vue : une entrée, puis lecture
//! de la projection (valeur + aperçu).

use super::clavier::{depuis_touche, Entree};
use super::editeur::Editeur;
use super::erreur::ErreurEval;
use super::eval::evaluate;
use super::glyphes::vers_canonique;

/// Rejoue une suite de touches clavier (noms de touches).
fn taper(ed: &mut Editeur, touches: &[&str], maintenant: f64) {
    for t in touches {
        let e = depuis_touche(t).unwrap_or_else(|| panic!("touche non gérée: {t:?}"));
        ed.traiter(e, maintenant);
    }
}

/// Rejoue une suite de boutons (jetons visibles).
fn cliquer(ed: &mut Editeur, jetons: &[char]) {
    for &j in jetons {
        ed.traiter(Entree::Jeton(j), 0.0);
    }
}

fn valeur(ed: &Editeur) -> String {
    ed.affichage().valeur
}

/* ------------------------ Bout en bout ------------------------ */

#[test]
fn scenario_addition() {
    let mut ed = Editeur::default();
    cliquer(&mut ed, &['1', '+', '2']);
    assert_eq!(valeur(&ed), "1+2");
    ed.traiter(Entree::Evaluer, 0.0);
    assert_eq!(valeur(&ed), "3");
}

#[test]
fn scenario_parentheses_et_glyphes() {
    let mut ed = Editeur::default();
    cliquer(&mut ed, &['(', '2', '×', '3', ')', '−', '1']);
    assert_eq!(ed.affichage().apercu, "(2×3)−1");
    assert_eq!(vers_canonique(&ed.affichage().apercu), "(2*3)-1");
    ed.traiter(Entree::Evaluer, 0.0);
    assert_eq!(valeur(&ed), "5");
}

#[test]
fn scenario_division_par_zero() {
    let mut ed = Editeur::default();
    cliquer(&mut ed, &['5', '÷', '0']);
    let r = ed.evaluer(3.0);
    assert!(matches!(r, Err(ErreurEval::Calcul(_))));
    assert_eq!(valeur(&ed), "Error");
    assert_eq!(ed.affichage().apercu, "Error");

    // 800 ms plus tard
    ed.tick(3.9);
    assert_eq!(valeur(&ed), "0");
    assert_eq!(ed.affichage().apercu, "");
}

#[test]
fn scenario_bruit_flottant() {
    let mut ed = Editeur::default();
    cliquer(&mut ed, &['0', '.', '1', '+', '0', '.', '2']);
    ed.traiter(Entree::Evaluer, 0.0);
    assert_eq!(valeur(&ed), "0.3");
}

#[test]
fn scenario_double_point() {
    let mut ed = Editeur::default();
    cliquer(&mut ed, &['3', '.', '.']);
    assert_eq!(ed.affichage().apercu, "3.");
}

#[test]
fn scenario_point_clavier_soumis_a_la_regle() {
    let mut ed = Editeur::default();
    taper(&mut ed, &["3", ".", "1", "."], 0.0);
    assert_eq!(ed.affichage().apercu, "3.1");
}

#[test]
fn scenario_retour_sur_vide() {
    let mut ed = Editeur::default();
    ed.traiter(Entree::Retour, 0.0);
    ed.traiter(Entree::Retour, 0.0);
    assert_eq!(ed.affichage().apercu, "");
    assert_eq!(valeur(&ed), "0");
}

#[test]
fn scenario_clavier_complet() {
    let mut ed = Editeur::default();
    taper(&mut ed, &["(", "7", "-", "2", ")", "*", "4", "/", "8"], 0.0);
    assert_eq!(ed.affichage().apercu, "(7−2)×4÷8");
    taper(&mut ed, &["Enter"], 0.0);
    assert_eq!(valeur(&ed), "2.5");

    taper(&mut ed, &["Escape"], 0.0);
    assert_eq!(valeur(&ed), "0");
}

#[test]
fn scenario_resultat_reutilise() {
    let mut ed = Editeur::default();
    cliquer(&mut ed, &['7', '−', '1', '0']);
    ed.traiter(Entree::Evaluer, 0.0);
    assert_eq!(valeur(&ed), "-3");

    // on enchaîne sur le résultat (signe ASCII compris)
    cliquer(&mut ed, &['×', '2']);
    ed.traiter(Entree::Evaluer, 0.0);
    assert_eq!(valeur(&ed), "-6");
}

#[test]
fn scenario_evaluer_vide() {
    let mut ed = Editeur::default();
    let r = ed.evaluer(0.0);
    assert!(matches!(r, Err(ErreurEval::Calcul(_))));
    assert_eq!(valeur(&ed), "Error");
}

#[test]
fn scenario_saisie_pendant_erreur() {
    let mut ed = Editeur::default();
    cliquer(&mut ed, &['×', '5']);
    assert_eq!(ed.evaluer(0.0), Err(ErreurEval::ExpressionMalformee));

    cliquer(&mut ed, &['8']);
    assert_eq!(ed.affichage().apercu, "8");

    // l’ancienne remise à vide ne doit pas effacer "8"
    ed.tick(5.0);
    assert_eq!(ed.affichage().apercu, "8");
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn resultat_relu_idempotent() {
    for s in [
        "1÷3",
        "2÷3×7",
        "−1.5×(2+0.25)",
        "1000÷7",
        "0.1+0.2",
        "(1+2)×(3−4)÷5",
        "123×4.5",
    ] {
        let v = evaluate(s).unwrap_or_else(|e| panic!("s={s:?} err={e}"));
        let relu = evaluate(&super::arrondi::format_resultat(v))
            .unwrap_or_else(|e| panic!("relecture s={s:?} err={e}"));
        assert_eq!(v, relu, "s={s:?}");
    }
}
