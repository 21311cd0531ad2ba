// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de valeurs (pas de récursion)
//
// Règles:
// - * / avant + -, associativité à gauche
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS d’opérateur binaire, il devient Tok::Neg
//    - Neg est préfixe et lie plus fort que * / : "2*-3" => "2 3 neg *"
// - Plus unaire : ignoré

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurEvaluation;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Dépile vers `out` tant que le sommet lie au moins aussi fort que `prec`.
fn depiler_prioritaires(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, prec: i32) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) || precedence(top) < prec {
            break;
        }
        if let Some(t) = ops.pop() {
            out.push(t);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Star, LPar, Num(1), Plus, Num(3), RPar]
///   rpn:    [Num(2), Neg, Num(1), Num(3), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEvaluation> {
    if tokens.is_empty() {
        return Err(ErreurEvaluation::Vide);
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions ("2(3)", ")(").
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEvaluation::Syntaxe);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEvaluation::Syntaxe);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // "()" ou "(2+)"
                if !prev_was_value {
                    return Err(ErreurEvaluation::Syntaxe);
                }
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEvaluation::ParenthesesNonEquilibrees),
                    }
                }
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                if matches!(tok, Tok::Minus) {
                    // préfixe : rien à dépiler
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurEvaluation::Syntaxe);
                }
                depiler_prioritaires(&mut ops, &mut out, precedence(&tok));
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurEvaluation::Syntaxe),
        }
    }

    // opérateur en fin d’expression
    if !prev_was_value {
        return Err(ErreurEvaluation::Syntaxe);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEvaluation::ParenthesesNonEquilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile (coût linéaire, aucune récursion).
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, ErreurEvaluation> {
    let mut st: Vec<BigRational> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(r.clone()),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEvaluation::Syntaxe)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEvaluation::Syntaxe)?;
                let a = st.pop().ok_or(ErreurEvaluation::Syntaxe)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b.is_zero() {
                            return Err(ErreurEvaluation::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEvaluation::Syntaxe),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEvaluation::Syntaxe),
    }
}
