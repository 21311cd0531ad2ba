//! Noyau exact
//!
//! Organisation interne :
//! - erreur.rs   : ErreurEvaluation (seule famille d’erreur)
//! - jetons.rs   : nettoyage + tokenisation
//! - rpn.rs      : shunting-yard + évaluation sur pile
//! - format.rs   : arrondi 8 décimales + forme canonique
//! - eval.rs     : pipeline complet (=, log, %)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{calculer, Operation};
