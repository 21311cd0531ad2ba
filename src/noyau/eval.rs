//! Noyau: évaluation (pipeline réel)
//!
//! nettoyer -> jetons -> RPN -> valeur exacte -> opération (=, log, %) -> arrondi -> texte
//!
//! Le texte d’historique est construit ici pour que l’UI n’ait qu’à l’enregistrer.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurEvaluation;
use super::format::{arrondir, format_decimal};
use super::jetons::{format_tokens, nettoyer, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Les trois déclencheurs d’évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Egal,
    Log,
    Pourcent,
}

/// Résultat d’un calcul réussi.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calcul {
    /// Ligne d’historique: "2+2 = 4", "log(10) = 1", "50% = 0.5".
    pub ligne: String,
    /// Forme canonique du résultat (devient le nouveau tampon).
    pub resultat: String,
}

/// Message commun aux valeurs qu’un f64 ne représente pas (infini côté flottant).
const HORS_PORTEE: &str = "valeur hors de portée des flottants";

/// Valeur exacte d’une expression (après nettoyage).
fn valeur_expression(entree: &str) -> Result<BigRational, ErreurEvaluation> {
    let propre = nettoyer(entree);

    let jetons = tokenize(&propre)?;
    let rpn = to_rpn(&jetons)?;
    tracing::debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "expression analysée"
    );

    eval_rpn(&rpn)
}

/// API publique : applique `op` au tampon et retourne la ligne d’historique + le résultat.
pub fn calculer(
    tampon: &str,
    op: Operation,
    decimales: usize,
) -> Result<Calcul, ErreurEvaluation> {
    let v = borne_flottante(valeur_expression(tampon)?)?;

    let brut = match op {
        Operation::Egal => v,
        Operation::Log => log10(&v)?,
        Operation::Pourcent => v / BigRational::from_integer(BigInt::from(100)),
    };
    let brut = borne_flottante(brut)?;

    let resultat = format_decimal(&arrondir(&brut, decimales), decimales);
    let ligne = match op {
        Operation::Egal => format!("{tampon} = {resultat}"),
        Operation::Log => format!("log({tampon}) = {resultat}"),
        Operation::Pourcent => format!("{tampon}% = {resultat}"),
    };

    Ok(Calcul { ligne, resultat })
}

/// Calcul exact, mais un résultat qu’un f64 ne sait pas représenter (infini) est une erreur.
fn borne_flottante(v: BigRational) -> Result<BigRational, ErreurEvaluation> {
    match v.to_f64() {
        Some(x) if x.is_finite() => Ok(v),
        _ => Err(ErreurEvaluation::HorsDomaine(HORS_PORTEE)),
    }
}

/// log10 via f64 (le seul passage flottant du noyau).
fn log10(v: &BigRational) -> Result<BigRational, ErreurEvaluation> {
    if v.is_zero() || v.is_negative() {
        return Err(ErreurEvaluation::HorsDomaine("log d’un nombre ≤ 0"));
    }

    let x = v
        .to_f64()
        .filter(|x| x.is_finite() && *x > 0.0)
        .ok_or(ErreurEvaluation::HorsDomaine(HORS_PORTEE))?;

    BigRational::from_float(x.log10())
        .ok_or(ErreurEvaluation::HorsDomaine("logarithme non fini"))
}
