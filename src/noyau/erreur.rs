// src/noyau/erreur.rs
//
// Une seule famille d’erreur pour tout le noyau : ErreurEvaluation.
// L’UI ne montre jamais le détail (elle affiche "Error"), mais le détail part dans les traces.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEvaluation {
    /// Rien à évaluer une fois l’entrée nettoyée.
    #[error("expression vide")]
    Vide,

    /// Littéral numérique mal formé (ex: "1.2.3", ".").
    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    /// Opérateur orphelin, opérande manquant, "()" …
    #[error("expression invalide")]
    Syntaxe,

    #[error("parenthèses non équilibrées")]
    ParenthesesNonEquilibrees,

    /// Résultat infini ou indéterminé (x/0, 0/0).
    #[error("division par zéro")]
    DivisionParZero,

    /// Valeur hors du domaine de l’opération (log d’un nombre ≤ 0, débordement f64).
    #[error("hors domaine: {0}")]
    HorsDomaine(&'static str),
}
