// src/app/evenements.rs
//
// Entrées utilisateur -> Action
// -----------------------------
// Deux sources seulement :
// - les boutons du pavé (table PAVE, un bouton = une Action)
// - le clavier (Touche, traduite par action_pour_touche)
//
// Aucune logique ici : la table et la traduction sont la seule référence des raccourcis.

/// Ce que l’état sait faire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Ajouter(char),
    Effacer,
    Retour,
    Egal,
    Log,
    Pourcent,
    ViderHistorique,
    Reinitialiser,
    BasculerTheme,
}

/// Touche clavier, indépendante d’egui (vue.rs fait la conversion).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Caractere(char),
    Entree,
    Retour,
    Echap,
}

/// Caractères que le clavier peut ajouter au tampon.
const TOUCHES_AJOUT: &str = "0123456789+-*/.";

pub fn action_pour_touche(t: Touche) -> Option<Action> {
    match t {
        Touche::Caractere(c) if TOUCHES_AJOUT.contains(c) => Some(Action::Ajouter(c)),
        Touche::Caractere('=') | Touche::Entree => Some(Action::Egal),
        Touche::Caractere('l' | 'L') => Some(Action::Log),
        Touche::Caractere('%') => Some(Action::Pourcent),
        Touche::Retour => Some(Action::Retour),
        Touche::Echap => Some(Action::Effacer),
        Touche::Caractere(_) => None,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Bouton {
    pub libelle: &'static str,
    pub aide: &'static str,
    pub action: Action,
}

const fn ajout(libelle: &'static str, c: char) -> Bouton {
    Bouton {
        libelle,
        aide: "",
        action: Action::Ajouter(c),
    }
}

/// Pavé, ligne par ligne.
pub const PAVE: &[&[Bouton]] = &[
    &[
        Bouton {
            libelle: "C",
            aide: "Efface l’entrée (Échap)",
            action: Action::Effacer,
        },
        ajout("(", '('),
        ajout(")", ')'),
        Bouton {
            libelle: "DEL",
            aide: "Efface le dernier caractère (Retour arrière)",
            action: Action::Retour,
        },
    ],
    &[
        Bouton {
            libelle: "log",
            aide: "Logarithme décimal (touche L)",
            action: Action::Log,
        },
        Bouton {
            libelle: "%",
            aide: "Divise par 100",
            action: Action::Pourcent,
        },
        ajout("/", '/'),
        ajout("*", '*'),
    ],
    &[ajout("7", '7'), ajout("8", '8'), ajout("9", '9'), ajout("-", '-')],
    &[ajout("4", '4'), ajout("5", '5'), ajout("6", '6'), ajout("+", '+')],
    &[
        ajout("1", '1'),
        ajout("2", '2'),
        ajout("3", '3'),
        Bouton {
            libelle: "=",
            aide: "Calcule (Entrée)",
            action: Action::Egal,
        },
    ],
    &[ajout("0", '0'), ajout(".", '.')],
];
