//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder une session par outil (calculatrice, convertisseur, minuteur,
//! chronomètre, horloge), la page courante et les cadences de rafraîchissement.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par le noyau.
//! - Une cadence ne tourne que pour la page visible ; quitter une page annule
//!   ses cadences ET remet sa session à neuf (rien ne persiste).
//! - `now` = temps monotone depuis le démarrage (fourni par la vue).

use std::time::Duration;

use crate::config::Reglages;
use crate::noyau::cadence::Cadence;
use crate::noyau::calculatrice::Calculatrice;
use crate::noyau::chronometre::{Chronometre, PERIODE_CHRONOMETRE};
use crate::noyau::convertisseur::Convertisseur;
use crate::noyau::horloge::{Fuseau, PERIODE_HORLOGE};
use crate::noyau::minuteur::{EvenementMinuteur, Minuteur, PERIODE_MINUTEUR};

/// Durée d’affichage d’une notification.
const DUREE_NOTIFICATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Accueil,
    Minuteur,
    Chronometre,
    Calculatrice,
    Horloge,
    Convertisseur,
    APropos,
    Contact,
    Confidentialite,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub titre: String,
    pub detail: String,
    pub jusqu_a: Duration,
}

#[derive(Clone, Debug)]
pub struct AppOutils {
    pub page: Page,

    // --- sessions ---
    pub calculatrice: Calculatrice,
    pub convertisseur: Convertisseur,
    pub minuteur: Minuteur,
    pub chronometre: Chronometre,
    pub fuseaux: Vec<Fuseau>,

    // --- rafraîchissement ---
    cadence_minuteur: Cadence,
    cadence_chronometre: Cadence,
    cadence_horloge: Cadence,

    // --- UX ---
    pub notification: Option<Notification>,

    // --- paramètres (pour remettre une session à neuf) ---
    reglages: Reglages,
}

impl Default for AppOutils {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppOutils {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            page: Page::Accueil,
            calculatrice: Calculatrice::default(),
            convertisseur: Convertisseur::avec_categorie(reglages.categorie),
            minuteur: reglages.minuteur.clone(),
            chronometre: Chronometre::default(),
            fuseaux: reglages.fuseaux.clone(),
            cadence_minuteur: Cadence::new(PERIODE_MINUTEUR),
            cadence_chronometre: Cadence::new(PERIODE_CHRONOMETRE),
            cadence_horloge: Cadence::new(PERIODE_HORLOGE),
            notification: None,
            reglages,
        }
    }

    /* ------------------------ Navigation ------------------------ */

    pub fn naviguer(&mut self, page: Page, now: Duration) {
        if page == self.page {
            return;
        }
        tracing::debug!(de = ?self.page, vers = ?page, "navigation");

        self.quitter_page();
        self.page = page;

        if page == Page::Horloge {
            self.cadence_horloge.demarrer(now);
        }
    }

    /// Démontage de la page courante : cadences annulées, session remise à neuf.
    fn quitter_page(&mut self) {
        self.cadence_minuteur.annuler();
        self.cadence_chronometre.annuler();
        self.cadence_horloge.annuler();

        match self.page {
            Page::Calculatrice => self.calculatrice = Calculatrice::default(),
            Page::Convertisseur => {
                self.convertisseur = Convertisseur::avec_categorie(self.reglages.categorie);
            }
            Page::Minuteur => self.minuteur = self.reglages.minuteur.clone(),
            Page::Chronometre => self.chronometre = Chronometre::default(),
            Page::Accueil
            | Page::Horloge
            | Page::APropos
            | Page::Contact
            | Page::Confidentialite => {}
        }
    }

    /* ------------------------ Boucle de rafraîchissement ------------------------ */

    /// Traite les ticks échus ; renvoie le délai avant la prochaine frame utile.
    pub fn avancer(&mut self, now: Duration) -> Option<Duration> {
        for _ in 0..self.cadence_minuteur.ticks_dus(now) {
            if let Some(EvenementMinuteur::Termine) = self.minuteur.tick() {
                self.cadence_minuteur.annuler();
                tracing::info!("minuteur terminé");
                self.notification = Some(Notification {
                    titre: "Timer finished!".to_string(),
                    detail: "Your countdown has reached zero.".to_string(),
                    jusqu_a: now + DUREE_NOTIFICATION,
                });
                break;
            }
        }

        if self.cadence_chronometre.ticks_dus(now) > 0 {
            self.chronometre.actualiser(now);
        }

        // l’horloge relit l’instant courant à chaque frame : le tick ne sert qu’au réveil
        self.cadence_horloge.ticks_dus(now);

        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.jusqu_a)
        {
            self.notification = None;
        }

        [
            self.cadence_minuteur.delai(now),
            self.cadence_chronometre.delai(now),
            self.cadence_horloge.delai(now),
            self.notification
                .as_ref()
                .map(|n| n.jusqu_a.saturating_sub(now)),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /* ------------------------ Minuteur ------------------------ */

    /// Start / Pause.
    pub fn minuteur_basculer(&mut self, now: Duration) {
        if self.minuteur.en_marche {
            self.minuteur.pause();
            self.cadence_minuteur.annuler();
        } else {
            self.minuteur.demarrer();
            if self.minuteur.en_marche {
                self.cadence_minuteur.demarrer(now);
            }
        }
    }

    pub fn minuteur_reinitialiser(&mut self) {
        self.minuteur.reinitialiser();
        self.cadence_minuteur.annuler();
    }

    /* ------------------------ Chronomètre ------------------------ */

    /// Start / Stop.
    pub fn chronometre_basculer(&mut self, now: Duration) {
        self.chronometre.basculer(now);
        if self.chronometre.en_marche {
            self.cadence_chronometre.demarrer(now);
        } else {
            self.cadence_chronometre.annuler();
        }
    }

    pub fn chronometre_reinitialiser(&mut self) {
        self.chronometre.reinitialiser();
        self.cadence_chronometre.annuler();
    }
}
