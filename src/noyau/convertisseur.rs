// src/noyau/convertisseur.rs
//
// Session du convertisseur : deux champs liés (de / vers) + leurs unités.
// Échanger = ré-étiqueter (aucun recalcul).

use super::conversion::{convertir_texte, Categorie};
use super::erreur::NoyauErreur;

#[derive(Clone, Debug, PartialEq)]
pub struct Convertisseur {
    pub categorie: Categorie,
    pub unite_de: &'static str,
    pub unite_vers: &'static str,
    pub valeur_de: String,
    pub valeur_vers: String,
}

impl Default for Convertisseur {
    fn default() -> Self {
        Self {
            categorie: Categorie::Longueur,
            unite_de: "m",
            unite_vers: "ft",
            valeur_de: String::new(),
            valeur_vers: String::new(),
        }
    }
}

impl Convertisseur {
    /// Session ouverte directement sur `categorie` (paire par défaut, champs vides).
    pub fn avec_categorie(categorie: Categorie) -> Self {
        let mut c = Self::default();
        if categorie != c.categorie {
            c.changer_categorie(categorie);
        }
        c
    }

    /// Édition du champ “de” : recalcule “vers”.
    pub fn saisir_de(&mut self, texte: impl Into<String>) {
        self.valeur_de = texte.into();
        self.valeur_vers = self.convertir(&self.valeur_de, self.unite_de, self.unite_vers);
    }

    /// Édition du champ “vers” : recalcule “de” (sens inverse).
    pub fn saisir_vers(&mut self, texte: impl Into<String>) {
        self.valeur_vers = texte.into();
        self.valeur_de = self.convertir(&self.valeur_vers, self.unite_vers, self.unite_de);
    }

    fn convertir(&self, texte: &str, de: &str, vers: &str) -> String {
        // Unités toujours prises dans la catégorie courante => pas d’erreur attendue.
        convertir_texte(texte, de, vers, self.categorie).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "conversion impossible");
            String::new()
        })
    }

    /// Change l’unité “de” (sans recalcul des champs).
    pub fn choisir_unite_de(&mut self, cle: &str) -> Result<(), NoyauErreur> {
        self.unite_de = self.categorie.unite(cle)?.cle;
        Ok(())
    }

    /// Change l’unité “vers” (sans recalcul des champs).
    pub fn choisir_unite_vers(&mut self, cle: &str) -> Result<(), NoyauErreur> {
        self.unite_vers = self.categorie.unite(cle)?.cle;
        Ok(())
    }

    /// Échange direct des unités ET des valeurs affichées.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.unite_de, &mut self.unite_vers);
        std::mem::swap(&mut self.valeur_de, &mut self.valeur_vers);
    }

    /// Nouvelle catégorie : champs vidés, deux premières unités par défaut.
    pub fn changer_categorie(&mut self, categorie: Categorie) {
        let (de, vers) = categorie.paire_par_defaut();
        self.categorie = categorie;
        self.unite_de = de;
        self.unite_vers = vers;
        self.valeur_de.clear();
        self.valeur_vers.clear();
    }

    /// Ligne “1 Meters = 3.28084 Feet”, seulement si les deux champs sont remplis.
    pub fn resume(&self) -> Option<String> {
        if self.valeur_de.is_empty() || self.valeur_vers.is_empty() {
            return None;
        }
        let de = self.categorie.unite(self.unite_de).ok()?;
        let vers = self.categorie.unite(self.unite_vers).ok()?;
        Some(format!(
            "{} {} = {} {}",
            self.valeur_de, de.nom, self.valeur_vers, vers.nom
        ))
    }
}
