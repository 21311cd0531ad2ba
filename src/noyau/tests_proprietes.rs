//! Propriétés (proptest) : le noyau contre une évaluation de référence.
//!
//! La référence est calculée structurellement pendant la génération :
//! chaque expression générée vient avec sa valeur exacte (ou None si une division par zéro
//! apparaît quelque part).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use proptest::prelude::*;

use super::erreur::ErreurEvaluation;
use super::format::{arrondir, format_decimal};
use super::{calculer, Operation};

#[derive(Clone, Debug)]
struct Genere {
    texte: String,
    valeur: Option<BigRational>,
}

fn feuille() -> impl Strategy<Value = Genere> {
    (0i64..1000, 0u32..3).prop_map(|(n, decimales)| {
        // n / 10^decimales écrit en décimal : 1234 avec 2 décimales -> "12.34"
        let d = 10i64.pow(decimales);
        let texte = if decimales == 0 {
            format!("{n}")
        } else {
            format!("{}.{:0width$}", n / d, n % d, width = decimales as usize)
        };
        Genere {
            texte,
            valeur: Some(BigRational::new(BigInt::from(n), BigInt::from(d))),
        }
    })
}

fn combiner(a: Genere, op: char, b: Genere) -> Genere {
    let valeur = match (a.valeur, b.valeur) {
        (Some(x), Some(y)) => match op {
            '+' => Some(x + y),
            '-' => Some(x - y),
            '*' => Some(x * y),
            _ if y.is_zero() => None,
            _ => Some(x / y),
        },
        _ => None,
    };
    Genere {
        texte: format!("({}{op}{})", a.texte, b.texte),
        valeur,
    }
}

fn expression() -> impl Strategy<Value = Genere> {
    feuille().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner.clone())
                .prop_map(|(a, op, b)| combiner(a, op, b)),
            inner.prop_map(|e| Genere {
                texte: format!("-{}", e.texte),
                valeur: e.valeur.map(|v| -v),
            }),
        ]
    })
}

fn attendu(v: &BigRational) -> String {
    format_decimal(&arrondir(v, 8), 8)
}

proptest! {
    #[test]
    fn prop_egal_conforme_a_la_reference(e in expression()) {
        let obtenu = calculer(&e.texte, Operation::Egal, 8);
        match e.valeur {
            Some(v) => {
                let c = obtenu.unwrap();
                prop_assert_eq!(&c.resultat, &attendu(&v));
                prop_assert_eq!(c.ligne, format!("{} = {}", e.texte, c.resultat));
            }
            None => prop_assert_eq!(obtenu, Err(ErreurEvaluation::DivisionParZero)),
        }
    }

    #[test]
    fn prop_pourcent_est_un_centieme(e in expression()) {
        if let Some(v) = e.valeur {
            let c = calculer(&e.texte, Operation::Pourcent, 8).unwrap();
            let centieme = v / BigRational::from_integer(BigInt::from(100));
            prop_assert_eq!(c.resultat, attendu(&centieme));
        }
    }

    #[test]
    fn prop_resultat_canonique_se_relit(e in expression()) {
        // Le résultat affiché redevient le tampon : il doit se réévaluer à lui-même.
        if let Ok(c) = calculer(&e.texte, Operation::Egal, 8) {
            let relu = calculer(&c.resultat, Operation::Egal, 8).unwrap();
            prop_assert_eq!(relu.resultat, c.resultat);
        }
    }

    #[test]
    fn prop_jamais_de_panique(s in "[0-9.()+*/ a-z%-]{0,40}") {
        for op in [Operation::Egal, Operation::Log, Operation::Pourcent] {
            let _ = calculer(&s, op, 8);
        }
    }
}
