// src/noyau/horloge.rs
//
// Horloge mondiale : heure/date d’un même instant dans plusieurs fuseaux,
// et écart horaire par rapport à l’heure locale.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use super::erreur::NoyauErreur;

pub const PERIODE_HORLOGE: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Fuseau de la machine (navigateur en wasm).
    Locale,
    Iana(Tz),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fuseau {
    pub nom: String,
    pub ville: String,
    pub pays: String,
    pub zone: Zone,
}

impl Fuseau {
    fn iana(nom: &str, zone: Tz, pays: &str) -> Self {
        Self {
            nom: nom.to_string(),
            ville: nom.to_string(),
            pays: pays.to_string(),
            zone: Zone::Iana(zone),
        }
    }

    /// Fuseau ajouté par configuration : `"Europe/Berlin"` => ville "Berlin".
    pub fn depuis_nom_iana(nom: &str) -> Result<Self, NoyauErreur> {
        let tz: Tz = nom
            .parse()
            .map_err(|_| NoyauErreur::FuseauInconnu(nom.to_string()))?;
        let ville = nom.rsplit('/').next().unwrap_or(nom).replace('_', " ");
        Ok(Self {
            nom: ville.clone(),
            ville,
            pays: String::new(),
            zone: Zone::Iana(tz),
        })
    }
}

/// Liste par défaut (heure locale en tête).
pub fn fuseaux_par_defaut() -> Vec<Fuseau> {
    use chrono_tz::{America, Asia, Australia, Europe};

    vec![
        Fuseau {
            nom: "Local Time".to_string(),
            ville: "Your Location".to_string(),
            pays: String::new(),
            zone: Zone::Locale,
        },
        Fuseau::iana("New York", America::New_York, "USA"),
        Fuseau::iana("Los Angeles", America::Los_Angeles, "USA"),
        Fuseau::iana("London", Europe::London, "UK"),
        Fuseau::iana("Paris", Europe::Paris, "France"),
        Fuseau::iana("Tokyo", Asia::Tokyo, "Japan"),
        Fuseau::iana("Sydney", Australia::Sydney, "Australia"),
        Fuseau::iana("Dubai", Asia::Dubai, "UAE"),
        Fuseau::iana("Singapore", Asia::Singapore, "Singapore"),
    ]
}

/* ------------------------ Formatage ------------------------ */

fn formater<T: TimeZone>(instant: DateTime<Utc>, tz: &T, motif: &str) -> String
where
    T::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(motif).to_string()
}

fn formater_zone(instant: DateTime<Utc>, zone: Zone, motif: &str) -> String {
    match zone {
        Zone::Locale => formater(instant, &Local, motif),
        Zone::Iana(tz) => formater(instant, &tz, motif),
    }
}

/// `03:04:05 PM`
pub fn format_heure(instant: DateTime<Utc>, zone: Zone) -> String {
    formater_zone(instant, zone, "%I:%M:%S %p")
}

/// `Friday, October 16, 2026`
pub fn format_date(instant: DateTime<Utc>, zone: Zone) -> String {
    formater_zone(instant, zone, "%A, %B %-d, %Y")
}

/// Décalage UTC de `zone` à cet instant (heure d’été comprise).
pub fn decalage(instant: DateTime<Utc>, zone: Zone) -> FixedOffset {
    match zone {
        Zone::Locale => instant.with_timezone(&Local).offset().fix(),
        Zone::Iana(tz) => instant.with_timezone(&tz).offset().fix(),
    }
}

/// Écart avec l’heure locale : `"Same time"`, `"+9h"`, `"-6h"` (heures arrondies).
pub fn ecart_horaire(instant: DateTime<Utc>, zone: Zone, local: FixedOffset) -> String {
    let ecart_s = decalage(instant, zone).local_minus_utc() - local.local_minus_utc();
    if ecart_s == 0 {
        return "Same time".to_string();
    }

    let heures = f64::from(ecart_s) / 3600.0;
    let signe = if heures > 0.0 { "+" } else { "" };
    format!("{signe}{}h", heures.round() as i64)
}
