//! Calculatrice : session d’évaluation enchaînée.
//!
//! Contrats :
//! - gauche -> droite, SANS priorité : `2 + 3 × 4 =` donne 20 ;
//! - l’arrondi à 7 décimales ne touche que l’affichage, pas l’accumulateur ;
//! - ± et % n’agissent que sur l’affichage (chaîne en attente intacte).

use super::arith::{apply, Operateur};
use super::lecture::{arrondir, format_nombre, lire_nombre};

/// Décimales visibles après une opération.
const DECIMALES_AFFICHAGE: usize = 7;

/// Valeur d’affichage après C.
const AFFICHAGE_INITIAL: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    /// Texte affiché (au plus un point décimal).
    pub affichage: String,
    /// Accumulateur de la chaîne en cours.
    pub precedent: Option<f64>,
    /// Opérateur en attente de son opérande droit.
    pub operation: Option<Operateur>,
    /// Vrai juste après un opérateur : le prochain chiffre remplace l’affichage.
    pub attente_operande: bool,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            precedent: None,
            operation: None,
            attente_operande: false,
        }
    }
}

impl Calculatrice {
    /// Valeur numérique de l’affichage (NaN si illisible).
    pub fn valeur(&self) -> f64 {
        lire_nombre(&self.affichage).unwrap_or(f64::NAN)
    }

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        debug_assert!(chiffre.is_ascii_digit());
        if self.attente_operande {
            self.affichage = chiffre.to_string();
            self.attente_operande = false;
        } else if self.affichage == AFFICHAGE_INITIAL {
            self.affichage = chiffre.to_string();
        } else {
            self.affichage.push(chiffre);
        }
    }

    pub fn saisir_decimale(&mut self) {
        if self.attente_operande {
            self.affichage = "0.".to_string();
            self.attente_operande = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// C : retour à l’identité, chaîne abandonnée.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// ± : multiplie l’affichage par −1.
    pub fn negate(&mut self) {
        self.affichage = format_nombre(self.valeur() * -1.0);
    }

    /// % : divise l’affichage par 100.
    pub fn percent(&mut self) {
        self.affichage = format_nombre(self.valeur() / 100.0);
    }

    /// Bouton opérateur (y compris `=`).
    pub fn operateur(&mut self, op: Operateur) {
        if op == Operateur::Egal {
            // `=` ne fait rien sans chaîne en cours
            if self.operation.is_some() && self.precedent.is_some() {
                self.resoudre(Operateur::Egal);
                self.operation = None;
                self.precedent = None;
                self.attente_operande = true;
            }
        } else {
            self.resoudre(op);
        }
    }

    /// Résout l’opération en attente avec l’opérande saisi, puis enregistre `suivant`.
    fn resoudre(&mut self, suivant: Operateur) {
        let saisie = self.valeur();

        match (self.precedent, self.operation) {
            (None, _) => self.precedent = Some(saisie),
            (Some(acc), Some(op)) => {
                // accumulateur NaN => 0 (même règle que “valeur fausse => 0”)
                let gauche = if acc.is_nan() { 0.0 } else { acc };
                let resultat = apply(gauche, saisie, op);

                self.affichage = format_nombre(arrondir(resultat, DECIMALES_AFFICHAGE));
                self.precedent = Some(resultat);
            }
            (Some(_), None) => {}
        }

        self.attente_operande = true;
        self.operation = Some(suivant);
    }

    /// Dispatch d’une étiquette de touche : `0-9 . C ± % + - × ÷ =`.
    ///
    /// Renvoie false si l’étiquette est inconnue.
    pub fn touche(&mut self, etiquette: &str) -> bool {
        let mut chars = etiquette.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                self.saisir_chiffre(c);
                return true;
            }
        }

        match etiquette {
            "." | "," => self.saisir_decimale(),
            "C" => self.clear(),
            "±" => self.negate(),
            "%" => self.percent(),
            _ => match Operateur::depuis_symbole(etiquette) {
                Some(op) => self.operateur(op),
                None => return false,
            },
        }
        true
    }

    /// Enchaîne plusieurs étiquettes (pratique pour les tests et le clavier).
    pub fn touches<'a>(&mut self, etiquettes: impl IntoIterator<Item = &'a str>) {
        for e in etiquettes {
            self.touche(e);
        }
    }
}

/// Grille des boutons (ligne par ligne) ; "" = case vide.
pub const PAVE: [[&str; 4]; 5] = [
    ["C", "±", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", "", ".", "="],
];
