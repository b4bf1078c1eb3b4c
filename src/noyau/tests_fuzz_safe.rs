//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - générateur xorshift, graine fixe
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * expression bien formée => succès fini, ou échec de calcul (division par zéro)
//!   * caractère hors liste blanche => CaracteresInvalides, toujours
//!   * tampon : jamais deux points dans un même morceau de nombre

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::evaluate;
use super::glyphes::{DIV, MOINS, MULT, PLUS};
use super::tampon::Tampon;

/* ------------------------ Générateur déterministe ------------------------ */

/// xorshift64* : graine fixe => même suite partout (CI comprise).
#[derive(Clone)]
struct Graine(u64);

impl Graine {
    fn new(graine: u64) -> Self {
        // xorshift reste bloqué sur 0
        Self(graine.max(1))
    }

    fn suivant(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Entier dans 0..n (0 si n == 0).
    fn sous(&mut self, n: u32) -> u32 {
        match n {
            0 => 0,
            _ => ((self.suivant() >> 32) % u64::from(n)) as u32,
        }
    }

    fn pile_ou_face(&mut self) -> bool {
        self.suivant() >> 63 == 1
    }

    fn parmi<T: Copy>(&mut self, choix: &[T]) -> T {
        choix[self.sous(choix.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

struct Chrono {
    debut: Instant,
    max: Duration,
}

impl Chrono {
    fn demarrer(max_ms: u64) -> Self {
        Self {
            debut: Instant::now(),
            max: Duration::from_millis(max_ms),
        }
    }

    fn verifier(&self, tour: usize) {
        let ecoule = self.debut.elapsed();
        assert!(
            ecoule <= self.max,
            "budget temps dépassé au tour {tour}: {ecoule:?} > {:?}",
            self.max
        );
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(g: &mut Graine) -> String {
    let entier = g.sous(100);
    match g.sous(3) {
        0 => format!("{entier}"),
        1 => format!("{entier}.{}", g.sous(1000)),
        _ => format!(".{}", g.sous(100)),
    }
}

fn gen_op(g: &mut Graine) -> char {
    g.parmi(&[PLUS, MOINS, MULT, DIV])
}

fn gen_expr(g: &mut Graine, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(g);
    }

    match g.sous(5) {
        0 => gen_nombre(g),
        1 => format!("({})", gen_expr(g, depth - 1)),
        2 => format!("{MOINS}{}", gen_expr(g, depth - 1)),
        _ => format!(
            "{}{}{}",
            gen_expr(g, depth - 1),
            gen_op(g),
            gen_expr(g, depth - 1)
        ),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_graine_reproductible() {
    let mut a = Graine::new(0);
    let mut b = Graine::new(0);
    let mut vus = [false; 7];
    for _ in 0..500 {
        let x = a.sous(7);
        assert_eq!(x, b.sous(7));
        vus[x as usize] = true;
    }
    // graine nulle non bloquée, toutes les valeurs sorties
    assert!(vus.iter().all(|&v| v), "vus={vus:?}");
    assert_eq!(a.sous(0), 0);
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let chrono = Chrono::demarrer(250);
    let mut g = Graine::new(0xC0FFEE);
    let mut succes = 0usize;

    for tour in 0..300 {
        chrono.verifier(tour);

        let expr = gen_expr(&mut g, 5);
        match evaluate(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                succes += 1;
            }
            // seule la division par zéro peut faire échouer une forme bien formée
            Err(e) => assert!(
                matches!(e, ErreurEval::Calcul(_)) && expr.contains(DIV),
                "erreur non attendue: expr={expr:?} err={e}"
            ),
        }
    }

    assert!(succes > 100, "trop peu de succès: {succes}");
}

#[test]
fn fuzz_safe_determinisme() {
    let (mut a, mut b) = (Graine::new(0xBADC0DE), Graine::new(0xBADC0DE));

    for _ in 0..50 {
        let (ea, eb) = (gen_expr(&mut a, 4), gen_expr(&mut b, 4));
        assert_eq!(ea, eb);
        assert_eq!(evaluate(&ea), evaluate(&eb));
    }
}

#[test]
fn fuzz_safe_caracteres_hors_liste() {
    let chrono = Chrono::demarrer(200);
    let mut g = Graine::new(0x5EED);
    let intrus = ['x', 'e', '^', ',', ';', '=', '"', 'π', '√', '%', '[', '!'];

    for tour in 0..200 {
        chrono.verifier(tour);

        let mut expr = gen_expr(&mut g, 3);
        let pos = if g.pile_ou_face() { 0 } else { expr.len() };
        expr.insert(pos, g.parmi(&intrus));

        assert_eq!(
            evaluate(&expr),
            Err(ErreurEval::CaracteresInvalides),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_soupe_de_jetons_sans_panique() {
    let chrono = Chrono::demarrer(200);
    let mut g = Graine::new(0xFEED);
    let alphabet = [
        '0', '1', '7', '.', '(', ')', ' ', PLUS, MOINS, MULT, DIV, '*', '/', '-',
    ];

    for tour in 0..500 {
        chrono.verifier(tour);

        let n = g.sous(12);
        let expr: String = (0..n).map(|_| g.parmi(&alphabet)).collect();

        // jamais de panique ; un succès est toujours fini
        if let Ok(v) = evaluate(&expr) {
            assert!(v.is_finite(), "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_tampon_point_unique() {
    let mut g = Graine::new(0xD07);
    let alphabet = ['3', '.', '.', '.', '(', ')', PLUS, MOINS, MULT, DIV];

    let mut t = Tampon::default();
    for _ in 0..2000 {
        if g.sous(10) == 0 {
            t.backspace();
        } else {
            t.append(g.parmi(&alphabet));
        }

        for morceau in t.texte_brut().split(|c: char| !(c.is_ascii_digit() || c == '.')) {
            assert!(
                morceau.matches('.').count() <= 1,
                "tampon={:?}",
                t.texte_brut()
            );
        }
    }
}
