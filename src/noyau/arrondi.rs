// src/noyau/arrondi.rs
//
// Arrondi “anti-bruit” et rendu texte du résultat.
//
// - arrondir : (v + ε)·10^n, arrondi au plus proche (moitié vers +∞), puis ÷10^n
// - format_resultat : forme décimale la plus courte qui se relit à l’identique
//   (jamais d’exposant : le texte doit repasser la liste blanche)

use num_traits::Float;

/// Arrondit `v` à `chiffres` décimales.
///
/// Le ε (machine) compense les représentations binaires juste sous la moitié
/// (ex: 1.005). Si la mise à l’échelle déborde, la valeur est déjà trop grande
/// pour porter des décimales : on la rend telle quelle.
pub fn arrondir<T: Float>(v: T, chiffres: i32) -> T {
    let (Some(dix), Some(demi)) = (T::from(10), T::from(0.5)) else {
        return v;
    };
    let facteur = dix.powi(chiffres);

    let echelle = (v + T::epsilon()) * facteur;
    if !echelle.is_finite() {
        return v;
    }

    (echelle + demi).floor() / facteur
}

/// Texte du résultat tel qu’il revient dans le tampon.
pub fn format_resultat(v: f64) -> String {
    // -0 s’affiche "0"
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
