// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurEvaluation;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : n’apparaît qu’en sortie de to_rpn (jamais produit par tokenize).
    Neg,

    LPar,
    RPar,
}

/// Jeu de caractères conservé par `nettoyer`.
pub fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '(' | ')' | '+' | '-' | '*' | '/')
}

/// Retire tout ce qui n’est pas chiffre, '.', parenthèse ou opérateur.
pub fn nettoyer(s: &str) -> String {
    s.chars().filter(|&c| caractere_autorise(c)).collect()
}

/// Tokenize une chaîne DÉJÀ nettoyée.
/// Supporte:
/// - nombres décimaux: 12, 1.5, .5, 5.
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEvaluation> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de [0-9.]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let brut: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_decimal(&brut)?));
            continue;
        }

        return Err(ErreurEvaluation::Syntaxe);
    }

    Ok(out)
}

/// "12.50" -> 1250/100 (réduit par BigRational::new).
fn lire_decimal(brut: &str) -> Result<BigRational, ErreurEvaluation> {
    let invalide = || ErreurEvaluation::NombreInvalide(brut.to_string());

    let (entier, frac) = match brut.split_once('.') {
        Some((e, f)) => (e, f),
        None => (brut, ""),
    };
    if frac.contains('.') || (entier.is_empty() && frac.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let d = if frac.is_empty() {
        BigInt::one()
    } else {
        BigInt::from(10).pow(frac.len() as u32)
    };

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
