//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue).
//!
//! Rôle : contenir la session (tampon, historique, erreur affichée, thème) et appliquer les
//! Actions du pavé / clavier.
//!
//! Contrats :
//! - Toute évaluation passe par le noyau ; l’erreur est absorbée ici (affichage "Error" +
//!   tampon vidé), jamais remontée à la vue.
//! - Une action = un traitement complet, synchrone.
//! - Le '.' est refusé si le segment courant (depuis le dernier + - * /) en contient déjà un.

use crate::noyau::jetons::caractere_autorise;
use crate::noyau::{calculer, Operation};
use crate::reglages::Reglages;

use super::evenements::Action;
use super::historique::Historique;

/// Texte affiché après un échec d’évaluation.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Clair,
    Sombre,
}

impl Theme {
    pub fn basculer(self) -> Self {
        match self {
            Self::Clair => Self::Sombre,
            Self::Sombre => Self::Clair,
        }
    }

    pub fn est_sombre(self) -> bool {
        self == Self::Sombre
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub tampon: String,

    // --- sorties ---
    pub erreur: bool, // "Error" à l’écran jusqu’à la prochaine modification du tampon
    pub historique: Historique,

    // --- UX ---
    pub theme: Theme,

    // --- paramètres ---
    decimales: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

/// Opérande en cours de saisie : ce qui suit le dernier opérateur.
pub fn segment_courant(tampon: &str) -> &str {
    tampon
        .rsplit(|c: char| matches!(c, '+' | '-' | '*' | '/'))
        .next()
        .unwrap_or("")
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            tampon: String::new(),
            erreur: false,
            historique: Historique::new(reglages.capacite_historique),
            theme: reglages.theme,
            decimales: reglages.decimales,
        }
    }

    /// Texte de l’afficheur : "Error", sinon le tampon, sinon "0".
    pub fn affichage(&self) -> &str {
        if self.erreur {
            TEXTE_ERREUR
        } else if self.tampon.is_empty() {
            "0"
        } else {
            &self.tampon
        }
    }

    /// Point d’entrée unique des boutons et du clavier.
    pub fn appliquer(&mut self, action: Action) {
        tracing::debug!(?action, tampon = %self.tampon, "action");

        match action {
            Action::Ajouter(c) => self.ajouter(c),
            Action::Effacer => self.effacer(),
            Action::Retour => self.retour(),
            Action::Egal => self.evaluer(Operation::Egal),
            Action::Log => self.evaluer(Operation::Log),
            Action::Pourcent => self.evaluer(Operation::Pourcent),
            Action::ViderHistorique => self.historique.vider(),
            Action::Reinitialiser => self.reinitialiser(),
            Action::BasculerTheme => self.theme = self.theme.basculer(),
        }
    }

    /* ------------------------ Tampon ------------------------ */

    /// Ajoute un caractère. Refusé (sans effet) si hors alphabet, ou si c’est un second '.'
    /// dans le même opérande.
    pub fn ajouter(&mut self, c: char) {
        if !caractere_autorise(c) {
            return;
        }
        if c == '.' && segment_courant(&self.tampon).contains('.') {
            return;
        }
        self.tampon.push(c);
        self.erreur = false;
    }

    /// C / Échap.
    pub fn effacer(&mut self) {
        self.tampon.clear();
        self.erreur = false;
    }

    /// DEL / Retour arrière.
    pub fn retour(&mut self) {
        self.tampon.pop();
        self.erreur = false;
    }

    /// AC : session neuve (le thème est conservé).
    pub fn reinitialiser(&mut self) {
        self.effacer();
        self.historique.vider();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=", "log" ou "%". Tampon vide : rien ne bouge.
    pub fn evaluer(&mut self, op: Operation) {
        if self.tampon.is_empty() {
            return;
        }

        match calculer(&self.tampon, op, self.decimales) {
            Ok(calcul) => {
                tracing::info!(ligne = %calcul.ligne, "calcul");
                self.historique.enregistrer(calcul.ligne);
                self.tampon = calcul.resultat;
                self.erreur = false;
            }
            Err(e) => {
                tracing::warn!(erreur = %e, tampon = %self.tampon, ?op, "évaluation impossible");
                self.tampon.clear();
                self.erreur = true;
            }
        }
    }
}
