//! src/reglages.rs
//!
//! Réglages de session (lus une fois au démarrage).
//!
//! - Valeurs par défaut : historique 5 lignes, arrondi 8 décimales, thème clair.
//! - Surcharges par l’environnement :
//!     CALC_THEME=sombre|dark|clair|light
//!     CALC_DECIMALES=<0..=20>
//! - Une valeur inconnue retombe sur le défaut (avec un warn!), jamais d’erreur.

use crate::app::etat::Theme;

/// Nombre de lignes d’historique conservées.
pub const CAPACITE_HISTORIQUE: usize = 5;

/// Décimales conservées après arrondi.
const DECIMALES_DEFAUT: usize = 8;

/// Garde-fou : on borne la précision.
const DECIMALES_MAX: usize = 20;

const VAR_THEME: &str = "CALC_THEME";
const VAR_DECIMALES: &str = "CALC_DECIMALES";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub capacite_historique: usize,
    pub decimales: usize,
    pub theme: Theme,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            capacite_historique: CAPACITE_HISTORIQUE,
            decimales: DECIMALES_DEFAUT,
            theme: Theme::Clair,
        }
    }
}

impl Reglages {
    /// Défauts + surcharges éventuelles de l’environnement.
    /// (en wasm32, `std::env::var` échoue toujours : on garde les défauts)
    pub fn depuis_env() -> Self {
        Self::depuis_source(|cle| std::env::var(cle).ok())
    }

    /// Défauts + surcharges lues par `lire` (une variable -> sa valeur, si présente).
    pub fn depuis_source(lire: impl Fn(&str) -> Option<String>) -> Self {
        let mut r = Self::default();
        if let Some(v) = lire(VAR_THEME) {
            match theme_depuis_texte(&v) {
                Some(t) => r.theme = t,
                None => tracing::warn!(variable = VAR_THEME, valeur = %v, "thème inconnu, ignoré"),
            }
        }
        if let Some(v) = lire(VAR_DECIMALES) {
            match v.trim().parse::<usize>() {
                Ok(d) => r = r.avec_decimales(d),
                Err(_) => tracing::warn!(variable = VAR_DECIMALES, valeur = %v, "entier attendu, ignoré"),
            }
        }
        r
    }

    pub fn avec_decimales(mut self, decimales: usize) -> Self {
        self.decimales = decimales.min(DECIMALES_MAX);
        self
    }
}

pub fn theme_depuis_texte(s: &str) -> Option<Theme> {
    match s.trim().to_lowercase().as_str() {
        "sombre" | "dark" => Some(Theme::Sombre),
        "clair" | "light" => Some(Theme::Clair),
        _ => None,
    }
}
