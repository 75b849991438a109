//! src/config.rs
//!
//! Configuration optionnelle (TOML).
//!
//! Emplacement (natif) : `$OUTILS_RAPIDES_CONFIG`, sinon
//! `<config_dir>/outils_rapides/config.toml`. En wasm : valeurs par défaut.
//!
//! Contrat : un fichier absent ou invalide ne bloque jamais le démarrage
//! (avertissement + défauts).
//!
//! ```toml
//! [minuteur]
//! minutes = 10
//! secondes = 30
//!
//! [convertisseur]
//! categorie = "temperature"
//!
//! [horloge]
//! fuseaux = ["Europe/Berlin", "America/Sao_Paulo"]
//! ```

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::conversion::Categorie;
use crate::noyau::horloge::{fuseaux_par_defaut, Fuseau};
use crate::noyau::minuteur::Minuteur;

#[cfg(not(target_arch = "wasm32"))]
const VAR_CHEMIN: &str = "OUTILS_RAPIDES_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigErreur {
    #[error("lecture de {chemin} impossible : {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide : {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Noyau(#[from] crate::noyau::NoyauErreur),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub minuteur: ConfigMinuteur,
    pub convertisseur: ConfigConvertisseur,
    pub horloge: ConfigHorloge,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigMinuteur {
    pub minutes: u32,
    pub secondes: u32,
}

impl Default for ConfigMinuteur {
    fn default() -> Self {
        Self {
            minutes: 5,
            secondes: 0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigConvertisseur {
    /// Clé de catégorie (`length`, `weight`, `temperature`, `volume`).
    pub categorie: String,
}

impl Default for ConfigConvertisseur {
    fn default() -> Self {
        Self {
            categorie: Categorie::Longueur.cle().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigHorloge {
    /// Fuseaux IANA ajoutés après la liste par défaut.
    pub fuseaux: Vec<String>,
}

/// Réglages résolus (clés vérifiées contre le noyau).
#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub minuteur: Minuteur,
    pub categorie: Categorie,
    pub fuseaux: Vec<Fuseau>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            minuteur: Minuteur::default(),
            categorie: Categorie::Longueur,
            fuseaux: fuseaux_par_defaut(),
        }
    }
}

impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self, ConfigErreur> {
        Ok(toml::from_str(texte)?)
    }

    /// Vérifie les clés et construit les réglages.
    pub fn resoudre(&self) -> Result<Reglages, ConfigErreur> {
        let categorie = Categorie::depuis_cle(&self.convertisseur.categorie)?;

        let mut fuseaux = fuseaux_par_defaut();
        for nom in &self.horloge.fuseaux {
            fuseaux.push(Fuseau::depuis_nom_iana(nom)?);
        }

        Ok(Reglages {
            minuteur: Minuteur::new(self.minuteur.minutes, self.minuteur.secondes),
            categorie,
            fuseaux,
        })
    }
}

/* ------------------------ Chargement (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn chemin_config() -> Option<std::path::PathBuf> {
    if let Some(p) = std::env::var_os(VAR_CHEMIN) {
        return Some(p.into());
    }
    dirs::config_dir().map(|d| d.join("outils_rapides").join("config.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
fn lire_fichier(chemin: &std::path::Path) -> Result<Option<Reglages>, ConfigErreur> {
    let texte = match std::fs::read_to_string(chemin) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigErreur::Lecture {
                chemin: chemin.display().to_string(),
                source,
            })
        }
    };
    Config::depuis_toml(&texte)?.resoudre().map(Some)
}

/// Réglages de démarrage : fichier si présent et valide, sinon défauts.
#[cfg(not(target_arch = "wasm32"))]
pub fn charger() -> Reglages {
    let Some(chemin) = chemin_config() else {
        tracing::debug!("aucun dossier de configuration, réglages par défaut");
        return Reglages::default();
    };

    match lire_fichier(&chemin) {
        Ok(Some(r)) => {
            tracing::info!(chemin = %chemin.display(), "configuration chargée");
            r
        }
        Ok(None) => {
            tracing::debug!(chemin = %chemin.display(), "pas de fichier de configuration");
            Reglages::default()
        }
        Err(e) => {
            tracing::warn!(chemin = %chemin.display(), error = %e, "configuration ignorée");
            Reglages::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn charger() -> Reglages {
    Reglages::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::horloge::Zone;
    use crate::noyau::NoyauErreur;

    #[test]
    fn vide_donne_les_defauts() {
        let r = Config::depuis_toml("").unwrap().resoudre().unwrap();
        assert_eq!(r, Reglages::default());
        assert_eq!(r.minuteur.affichage(), "05:00");
    }

    #[test]
    fn fichier_complet() {
        let texte = r#"
            [minuteur]
            minutes = 10
            secondes = 30

            [convertisseur]
            categorie = "temperature"

            [horloge]
            fuseaux = ["Europe/Berlin"]
        "#;
        let r = Config::depuis_toml(texte).unwrap().resoudre().unwrap();
        assert_eq!(r.minuteur.affichage(), "10:30");
        assert_eq!(r.categorie, Categorie::Temperature);
        assert_eq!(r.fuseaux.len(), 10);
        assert_eq!(
            r.fuseaux.last().map(|f| f.zone),
            Some(Zone::Iana(chrono_tz::Europe::Berlin))
        );
    }

    #[test]
    fn minuteur_borne() {
        let r = Config::depuis_toml("[minuteur]\nminutes = 500\nsecondes = 90")
            .unwrap()
            .resoudre()
            .unwrap();
        assert_eq!(r.minuteur.affichage(), "99:59");
    }

    #[test]
    fn cles_invalides() {
        let c = Config::depuis_toml("[convertisseur]\ncategorie = \"speed\"").unwrap();
        assert!(matches!(
            c.resoudre(),
            Err(ConfigErreur::Noyau(NoyauErreur::CategorieInconnue(_)))
        ));

        let c = Config::depuis_toml("[horloge]\nfuseaux = [\"Nowhere/City\"]").unwrap();
        assert!(matches!(
            c.resoudre(),
            Err(ConfigErreur::Noyau(NoyauErreur::FuseauInconnu(_)))
        ));

        assert!(matches!(
            Config::depuis_toml("[minuteur]\nheures = 1"),
            Err(ConfigErreur::Toml(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn fichier_absent_sans_erreur() {
        let chemin = std::env::temp_dir().join("outils_rapides_absent_9f3c.toml");
        assert!(matches!(lire_fichier(&chemin), Ok(None)));
    }
}
