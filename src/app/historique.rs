// src/app/historique.rs
//
// Historique borné des calculs, le plus récent en tête.
// Pas de déduplication, pas de réordonnancement : l’ordre d’insertion fait foi.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: VecDeque<String>,
    capacite: usize,
}

impl Historique {
    pub fn new(capacite: usize) -> Self {
        Self {
            entrees: VecDeque::with_capacity(capacite + 1),
            capacite,
        }
    }

    /// Insère en tête ; au-delà de la capacité, la plus ancienne disparaît.
    pub fn enregistrer(&mut self, ligne: impl Into<String>) {
        self.entrees.push_front(ligne.into());
        self.entrees.truncate(self.capacite);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    /// Lignes à afficher, plus récente d’abord.
    pub fn lignes(&self) -> impl Iterator<Item = &str> {
        self.entrees.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
