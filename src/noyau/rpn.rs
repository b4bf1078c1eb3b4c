// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur (f64)
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Puis évaluer la RPN sur une pile (itératif : pas de récursion, pas de risque de pile)
//
// Règles:
// - Précédence: + - (1) < * / (2) < unaires + - (3)
// - Binaires associatifs à gauche ; unaires préfixes, empilés sans dépiler
// - '+'/'-' sont unaires quand on attend une valeur (début, après opérateur, après '(')
// - Toute forme incomplète (5*, (), 2(3), 2 3, parenthèses orphelines) est refusée

use super::erreur::ErreurEval;
use super::jetons::Tok;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pos,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Elem {
    Num(f64),
    Op(Op),
}

/// Pile d’opérateurs du shunting-yard.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Op),
    LPar,
}

fn precedence(op: Op) -> u8 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
        Op::Neg | Op::Pos => 3,
    }
}

fn binaire(t: &Tok) -> Option<Op> {
    match t {
        Tok::Plus => Some(Op::Add),
        Tok::Minus => Some(Op::Sub),
        Tok::Star => Some(Op::Mul),
        Tok::Slash => Some(Op::Div),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Op(Neg), Op(Mul)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Elem>, ErreurEval> {
    if tokens.is_empty() {
        return Err(ErreurEval::calcul("expression vide"));
    }

    let mut out: Vec<Elem> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    // Vrai au début, après un opérateur ou après '(' : il faut une valeur.
    let mut attend_valeur = true;

    for tok in tokens {
        match tok {
            Tok::Num(v) => {
                if !attend_valeur {
                    return Err(ErreurEval::calcul("deux valeurs consécutives"));
                }
                out.push(Elem::Num(*v));
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurEval::calcul("parenthèse ouvrante après une valeur"));
                }
                ops.push(Pile::LPar);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurEval::calcul("parenthèse fermante inattendue"));
                }
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(Pile::Op(op)) => out.push(Elem::Op(op)),
                        None => return Err(ErreurEval::calcul("parenthèse fermante orpheline")),
                    }
                }
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                let op = if matches!(tok, Tok::Minus) {
                    Op::Neg
                } else {
                    Op::Pos
                };
                ops.push(Pile::Op(op));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurEval::calcul("opérateur sans opérande gauche"));
                }
                let Some(op) = binaire(tok) else {
                    return Err(ErreurEval::calcul("opérateur inconnu"));
                };

                while let Some(Pile::Op(top)) = ops.last().copied() {
                    if precedence(top) >= precedence(op) {
                        out.push(Elem::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(Pile::Op(op));
                attend_valeur = true;
            }
        }
    }

    if attend_valeur {
        return Err(ErreurEval::calcul("expression incomplète"));
    }

    while let Some(p) = ops.pop() {
        match p {
            Pile::LPar => return Err(ErreurEval::calcul("parenthèses non fermées")),
            Pile::Op(op) => out.push(Elem::Op(op)),
        }
    }

    Ok(out)
}

/// Évalue une RPN en arithmétique flottante IEEE-754.
/// La division par zéro donne ±inf ou NaN : c’est l’appelant qui tranche.
pub fn eval_rpn(rpn: &[Elem]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for e in rpn {
        match *e {
            Elem::Num(v) => st.push(v),

            Elem::Op(op @ (Op::Neg | Op::Pos)) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::calcul("opérateur unaire sans argument"))?;
                st.push(if op == Op::Neg { -x } else { x });
            }

            Elem::Op(op) => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEval::calcul("expression invalide"))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEval::calcul("expression invalide"))?;
                st.push(appliquer(op, a, b));
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::calcul("expression invalide")),
    }
}

fn appliquer(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
        // les unaires sont traités en amont
        Op::Neg | Op::Pos => b,
    }
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[Elem]) -> String {
    let mut out = Vec::with_capacity(rpn.len());
    for e in rpn {
        let s = match e {
            Elem::Num(v) => format!("{v}"),
            Elem::Op(Op::Add) => "+".to_string(),
            Elem::Op(Op::Sub) => "-".to_string(),
            Elem::Op(Op::Mul) => "*".to_string(),
            Elem::Op(Op::Div) => "/".to_string(),
            Elem::Op(Op::Neg) => "neg".to_string(),
            Elem::Op(Op::Pos) => "pos".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
