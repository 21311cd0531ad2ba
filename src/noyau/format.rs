// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Arrondi à `decimales` chiffres après la virgule.
/// round(r * 10^d) / 10^d, demi-cas loin de zéro (Ratio::round).
pub fn arrondir(r: &BigRational, decimales: usize) -> BigRational {
    let scale = BigRational::from_integer(pow10(decimales));
    (r * &scale).round() / scale
}

/// Forme canonique d’un résultat déjà arrondi : décimal simple, sans zéros finaux.
///   4 -> "4" ; 1/2 -> "0.5" ; -5/4 -> "-1.25" ; 0 -> "0" (jamais "-0")
pub fn format_decimal(r: &BigRational, decimales: usize) -> String {
    let scale = pow10(decimales);
    let scaled = (r.abs() * BigRational::from_integer(scale.clone())).to_integer();

    if scaled.is_zero() {
        return "0".to_string();
    }

    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if r.is_negative() { "-" } else { "" };

    if frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}
