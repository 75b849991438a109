// src/noyau/lecture.rs
//
// Lecture tolérante des nombres saisis + affichage des résultats.
// Même texte dans les deux sens : ce qui est affiché doit se relire à l’identique.

/// Au-delà, l’affichage passe en notation exponentielle.
const SEUIL_EXPO_HAUT: f64 = 1e21;
/// En deçà (hors zéro), idem.
const SEUIL_EXPO_BAS: f64 = 1e-6;

/* ------------------------ Lecture ------------------------ */

/// Lit le plus long préfixe numérique de `s` (espaces de tête ignorés).
///
/// Accepte : signe, chiffres, partie décimale, exposant, `Infinity`, `NaN`.
/// `"12abc"` se lit 12 ; `""`, `"."`, `"-"` ne se lisent pas.
pub fn lire_nombre(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let octets = s.as_bytes();
    let mut i = 0;

    if matches!(octets.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    // mots-clés (après le signe éventuel)
    let reste = &s[i..];
    if reste.starts_with("Infinity") {
        let negatif = octets.first() == Some(&b'-');
        return Some(if negatif { f64::NEG_INFINITY } else { f64::INFINITY });
    }
    if i == 0 && reste.starts_with("NaN") {
        return Some(f64::NAN);
    }

    let debut_chiffres = i;
    while i < octets.len() && octets[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut_chiffres;

    if i < octets.len() && octets[i] == b'.' {
        i += 1;
        let debut_frac = i;
        while i < octets.len() && octets[i].is_ascii_digit() {
            i += 1;
        }
        nb_chiffres += i - debut_frac;
    }

    if nb_chiffres == 0 {
        return None;
    }

    // exposant : seulement s’il est complet ("1e" => 1)
    if i < octets.len() && (octets[i] == b'e' || octets[i] == b'E') {
        let mut j = i + 1;
        if j < octets.len() && (octets[j] == b'+' || octets[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < octets.len() && octets[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    // "5." et ".5" sont acceptés par parse::<f64>()
    s[..i].parse::<f64>().ok()
}

/* ------------------------ Affichage ------------------------ */

/// Affichage “court” d’un nombre (aller-retour exact avec `lire_nombre`).
///
/// - `NaN`, `Infinity`, `-Infinity`
/// - `-0` => `0`
/// - notation exponentielle hors de [1e-6, 1e21)
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if abs >= SEUIL_EXPO_HAUT || abs < SEUIL_EXPO_BAS {
        // Rust écrit 1e21 / 1e-7 ; on force le signe de l’exposant positif.
        let brut = format!("{x:e}");
        return match brut.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => brut,
        };
    }

    format!("{x}")
}

/// Chiffres nécessaires pour écrire exactement la partie fractionnaire d’un f64.
const EXPANSION_EXACTE: usize = 1080;

/// `x` à `decimales` chiffres après la virgule, égalités arrondies en s’éloignant de zéro.
///
/// `{:.N}` départage une égalité exacte vers le chiffre pair (0.00390625 => 0.0039062) ;
/// ici on prend toujours le candidat de plus grande valeur absolue (=> 0.0039063).
/// Hors égalité exacte, `{:.N}` est déjà correctement arrondi.
fn fixe(x: f64, decimales: usize) -> String {
    let abs = x.abs();
    let exact = format!("{:.*}", EXPANSION_EXACTE, abs);

    let corps = match exact.split_once('.') {
        Some((entier, frac)) if est_egalite(frac, decimales) => {
            let tronque = if decimales == 0 {
                entier.to_string()
            } else {
                format!("{entier}.{}", &frac[..decimales])
            };
            incrementer(&tronque)
        }
        _ => format!("{abs:.decimales$}"),
    };

    if x < 0.0 {
        format!("-{corps}")
    } else {
        corps
    }
}

/// Le chiffre de rang `decimales + 1` est un 5 suivi uniquement de zéros.
fn est_egalite(frac: &str, decimales: usize) -> bool {
    match frac.as_bytes().split_at_checked(decimales) {
        Some((_, [b'5', reste @ ..])) => reste.iter().all(|&c| c == b'0'),
        _ => false,
    }
}

/// Ajoute une unité au dernier chiffre (retenue propagée, point conservé).
fn incrementer(nombre: &str) -> String {
    let mut octets = nombre.as_bytes().to_vec();
    let mut retenue = true;
    for i in (0..octets.len()).rev() {
        match octets[i] {
            b'.' => continue,
            b'9' => octets[i] = b'0',
            _ => {
                octets[i] += 1;
                retenue = false;
                break;
            }
        }
    }
    if retenue {
        octets.insert(0, b'1');
    }
    String::from_utf8_lossy(&octets).into_owned()
}

/// Arrondi décimal (pour l’affichage seulement).
///
/// Passe par le texte à `decimales` chiffres : pas de `x * 10^n` qui déborde
/// ou ajoute du bruit. Non fini et |x| >= 1e21 : inchangé.
pub fn arrondir(x: f64, decimales: usize) -> f64 {
    if !x.is_finite() || x.abs() >= SEUIL_EXPO_HAUT {
        return x;
    }
    fixe(x, decimales).parse::<f64>().unwrap_or(x)
}

/// Décimales fixes puis retrait des zéros de queue (et du point final).
///
/// `12.000000` => `12`, `12.500000` => `12.5`.
pub fn format_fixe_compact(x: f64, decimales: usize) -> String {
    if !x.is_finite() || x.abs() >= SEUIL_EXPO_HAUT {
        return format_nombre(x);
    }

    let mut s = fixe(x, decimales);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
