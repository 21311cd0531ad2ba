//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : toute entrée donne Ok ou une ErreurEvaluation, jamais une panique
//! - entrées très longues / très imbriquées : pas de débordement de pile

use std::time::{Duration, Instant};

use super::erreur::ErreurEvaluation;
use super::{calculer, Operation};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Suite de touches « au hasard » dans l’alphabet du tampon (comme un utilisateur pressé).
fn gen_frappes(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '(', ')',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_frappes_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(12) as usize;
        let s = gen_frappes(&mut rng, longueur);

        for op in [Operation::Egal, Operation::Log, Operation::Pourcent] {
            match calculer(&s, op, 8) {
                Ok(c) => {
                    assert!(!c.resultat.is_empty(), "résultat vide pour {s:?}");
                    seen_ok += 1;
                }
                Err(e) => {
                    assert!(!e.to_string().is_empty(), "erreur sans message: {s:?}");
                    seen_err += 1;
                }
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        let sa = gen_frappes(&mut a, 10);
        let sb = gen_frappes(&mut b, 10);
        assert_eq!(sa, sb);
        assert_eq!(
            calculer(&sa, Operation::Egal, 8),
            calculer(&sb, Operation::Egal, 8)
        );
    }
}

#[test]
fn longue_chaine_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // 20 000 termes : évaluation itérative, pas de récursion
    let expr = vec!["1"; 20_000].join("+");
    let c = calculer(&expr, Operation::Egal, 8).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(c.resultat, "20000");
}

#[test]
fn imbrication_profonde_anti_pile() {
    let profondeur = 10_000;
    let expr = format!("{}2{}", "(".repeat(profondeur), ")".repeat(profondeur));
    let c = calculer(&expr, Operation::Egal, 8).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(c.resultat, "2");

    let boiteux = format!("{}2{}", "(".repeat(profondeur), ")".repeat(profondeur - 1));
    assert_eq!(
        calculer(&boiteux, Operation::Egal, 8),
        Err(ErreurEvaluation::ParenthesesNonEquilibrees)
    );
}
