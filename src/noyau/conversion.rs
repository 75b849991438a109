//! Moteur de conversion d’unités.
//!
//! - Catégories linéaires (longueur, masse, volume) : `v * facteur(de) / facteur(vers)`,
//!   facteurs relatifs à la plus petite unité de la catégorie (facteur 1).
//! - Température : affine, en deux sauts via le Celsius (6 formules au lieu de 9).

use super::erreur::NoyauErreur;
use super::lecture::{format_fixe_compact, lire_nombre};

/// Décimales affichées pour un résultat de conversion.
pub const DECIMALES_CONVERSION: usize = 6;

const ZERO_ABSOLU_C: f64 = 273.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Categorie {
    Longueur,
    Masse,
    Temperature,
    Volume,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unite {
    pub cle: &'static str,
    pub nom: &'static str,
    /// Taille relative à l’unité de base (ignoré pour la température).
    pub facteur: f64,
}

const fn u(cle: &'static str, nom: &'static str, facteur: f64) -> Unite {
    Unite { cle, nom, facteur }
}

/* ------------------------ Tables (ordre de déclaration = ordre d’affichage) ------------------------ */

const LONGUEUR: &[Unite] = &[
    u("mm", "Millimeters", 1.0),
    u("cm", "Centimeters", 10.0),
    u("m", "Meters", 1000.0),
    u("km", "Kilometers", 1_000_000.0),
    u("in", "Inches", 25.4),
    u("ft", "Feet", 304.8),
    u("yd", "Yards", 914.4),
    u("mi", "Miles", 1_609_344.0),
];

const MASSE: &[Unite] = &[
    u("mg", "Milligrams", 1.0),
    u("g", "Grams", 1000.0),
    u("kg", "Kilograms", 1_000_000.0),
    u("oz", "Ounces", 28_349.5),
    u("lb", "Pounds", 453_592.0),
    u("st", "Stones", 6_350_290.0),
];

const TEMPERATURE: &[Unite] = &[
    u("c", "Celsius", 1.0),
    u("f", "Fahrenheit", 1.0),
    u("k", "Kelvin", 1.0),
];

const VOLUME: &[Unite] = &[
    u("ml", "Milliliters", 1.0),
    u("l", "Liters", 1000.0),
    u("floz", "Fluid Ounces", 29.5735),
    u("cup", "Cups", 236.588),
    u("pt", "Pints", 473.176),
    u("qt", "Quarts", 946.353),
    u("gal", "Gallons", 3785.41),
];

impl Categorie {
    pub const TOUTES: [Categorie; 4] = [
        Categorie::Longueur,
        Categorie::Masse,
        Categorie::Temperature,
        Categorie::Volume,
    ];

    pub fn cle(self) -> &'static str {
        match self {
            Categorie::Longueur => "length",
            Categorie::Masse => "weight",
            Categorie::Temperature => "temperature",
            Categorie::Volume => "volume",
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Categorie::Longueur => "Length",
            Categorie::Masse => "Weight",
            Categorie::Temperature => "Temperature",
            Categorie::Volume => "Volume",
        }
    }

    pub fn depuis_cle(cle: &str) -> Result<Self, NoyauErreur> {
        Self::TOUTES
            .into_iter()
            .find(|c| c.cle() == cle)
            .ok_or_else(|| NoyauErreur::CategorieInconnue(cle.to_string()))
    }

    pub fn unites(self) -> &'static [Unite] {
        match self {
            Categorie::Longueur => LONGUEUR,
            Categorie::Masse => MASSE,
            Categorie::Temperature => TEMPERATURE,
            Categorie::Volume => VOLUME,
        }
    }

    pub fn unite(self, cle: &str) -> Result<&'static Unite, NoyauErreur> {
        self.unites()
            .iter()
            .find(|u| u.cle == cle)
            .ok_or_else(|| NoyauErreur::UniteInconnue {
                categorie: self.cle(),
                unite: cle.to_string(),
            })
    }

    /// Paire (de, vers) par défaut : les deux premières unités déclarées
    /// (ou la première deux fois).
    pub fn paire_par_defaut(self) -> (&'static str, &'static str) {
        let unites = self.unites();
        let de = unites[0].cle;
        let vers = unites.get(1).map_or(de, |u| u.cle);
        (de, vers)
    }

    pub fn est_affine(self) -> bool {
        self == Categorie::Temperature
    }
}

/* ------------------------ Température ------------------------ */

fn vers_celsius(v: f64, de: &str) -> f64 {
    match de {
        "f" => (v - 32.0) * 5.0 / 9.0,
        "k" => v - ZERO_ABSOLU_C,
        _ => v,
    }
}

fn depuis_celsius(c: f64, vers: &str) -> f64 {
    match vers {
        "f" => c * 9.0 / 5.0 + 32.0,
        "k" => c + ZERO_ABSOLU_C,
        _ => c,
    }
}

/* ------------------------ API ------------------------ */

/// Convertit `value` de `from` vers `to` dans `categorie`.
///
/// `Ok(None)` si `value` n’est pas un nombre fini ; erreur si une clé d’unité
/// n’appartient pas à la catégorie.
pub fn convert(
    value: f64,
    from: &str,
    to: &str,
    categorie: Categorie,
) -> Result<Option<f64>, NoyauErreur> {
    let de = categorie.unite(from)?;
    let vers = categorie.unite(to)?;

    if !value.is_finite() {
        return Ok(None);
    }

    let resultat = if categorie.est_affine() {
        depuis_celsius(vers_celsius(value, de.cle), vers.cle)
    } else {
        value * de.facteur / vers.facteur
    };
    Ok(Some(resultat))
}

/// Version “champ texte” : lit la saisie, convertit, formate (6 décimales compactes).
///
/// Saisie vide ou illisible => chaîne vide (rien à afficher, pas d’erreur).
pub fn convertir_texte(
    saisie: &str,
    from: &str,
    to: &str,
    categorie: Categorie,
) -> Result<String, NoyauErreur> {
    let Some(v) = lire_nombre(saisie) else {
        // clés vérifiées même sans valeur
        categorie.unite(from)?;
        categorie.unite(to)?;
        return Ok(String::new());
    };

    Ok(convert(v, from, to, categorie)?
        .map(|r| format_fixe_compact(r, DECIMALES_CONVERSION))
        .unwrap_or_default())
}
