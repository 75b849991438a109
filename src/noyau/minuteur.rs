// src/noyau/minuteur.rs
//
// Minuteur (compte à rebours), à la seconde.
// Un seul mode actif : Reglage (on ajuste mm:ss) ou Decompte (en marche ou en pause).

use std::time::Duration;

pub const PERIODE_MINUTEUR: Duration = Duration::from_millis(1000);

const MINUTES_MAX: u32 = 99;
const SECONDES_MAX: u32 = 59;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Reglage,
    Decompte,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvenementMinuteur {
    Termine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minuteur {
    pub minutes: u32,
    pub secondes: u32,
    pub restant: u32,
    pub en_marche: bool,
    pub mode: Mode,
}

impl Default for Minuteur {
    fn default() -> Self {
        Self::new(5, 0)
    }
}

impl Minuteur {
    /// Réglage initial (borné comme les boutons ±).
    pub fn new(minutes: u32, secondes: u32) -> Self {
        Self {
            minutes: minutes.min(MINUTES_MAX),
            secondes: secondes.min(SECONDES_MAX),
            restant: 0,
            en_marche: false,
            mode: Mode::Reglage,
        }
    }

    pub fn total_regle(&self) -> u32 {
        self.minutes * 60 + self.secondes
    }

    pub fn peut_demarrer(&self) -> bool {
        self.mode == Mode::Decompte || self.total_regle() > 0
    }

    /// Démarre depuis le réglage, ou reprend après une pause.
    ///
    /// Réglage à 00:00 : rien.
    pub fn demarrer(&mut self) {
        if self.mode == Mode::Reglage {
            let total = self.total_regle();
            if total == 0 {
                return;
            }
            self.restant = total;
            self.mode = Mode::Decompte;
        }
        self.en_marche = true;
    }

    pub fn pause(&mut self) {
        self.en_marche = false;
    }

    pub fn reinitialiser(&mut self) {
        self.en_marche = false;
        self.mode = Mode::Reglage;
        self.restant = 0;
    }

    pub fn ajuster_minutes(&mut self, plus: bool) {
        if self.mode != Mode::Reglage {
            return;
        }
        self.minutes = ajuster(self.minutes, plus, MINUTES_MAX);
    }

    pub fn ajuster_secondes(&mut self, plus: bool) {
        if self.mode != Mode::Reglage {
            return;
        }
        self.secondes = ajuster(self.secondes, plus, SECONDES_MAX);
    }

    /// Une seconde écoulée.
    pub fn tick(&mut self) -> Option<EvenementMinuteur> {
        if !self.en_marche || self.restant == 0 {
            return None;
        }
        if self.restant <= 1 {
            self.en_marche = false;
            self.mode = Mode::Reglage;
            self.restant = 0;
            return Some(EvenementMinuteur::Termine);
        }
        self.restant -= 1;
        None
    }

    pub fn affichage(&self) -> String {
        match self.mode {
            Mode::Reglage => format_mm_ss(self.total_regle()),
            Mode::Decompte => format_mm_ss(self.restant),
        }
    }

    /// Avancement en % (0 en réglage).
    pub fn progression(&self) -> f32 {
        let total = self.total_regle();
        if self.mode == Mode::Reglage || total == 0 {
            return 0.0;
        }
        (total.saturating_sub(self.restant)) as f32 / total as f32 * 100.0
    }
}

fn ajuster(v: u32, plus: bool, max: u32) -> u32 {
    if plus {
        (v + 1).min(max)
    } else {
        v.saturating_sub(1)
    }
}

/// `MM:SS` (minutes non bornées à 2 chiffres).
pub fn format_mm_ss(total_secondes: u32) -> String {
    format!("{:02}:{:02}", total_secondes / 60, total_secondes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reglage_borne() {
        let mut m = Minuteur::new(99, 59);
        m.ajuster_minutes(true);
        m.ajuster_secondes(true);
        assert_eq!((m.minutes, m.secondes), (99, 59));

        let mut m = Minuteur::new(0, 0);
        m.ajuster_minutes(false);
        m.ajuster_secondes(false);
        assert_eq!((m.minutes, m.secondes), (0, 0));

        assert_eq!(Minuteur::new(500, 75).affichage(), "99:59");
    }

    #[test]
    fn zero_ne_demarre_pas() {
        let mut m = Minuteur::new(0, 0);
        assert!(!m.peut_demarrer());
        m.demarrer();
        assert_eq!(m.mode, Mode::Reglage);
        assert!(!m.en_marche);
    }

    #[test]
    fn decompte_jusqu_a_la_fin() {
        let mut m = Minuteur::new(0, 3);
        m.demarrer();
        assert_eq!(m.affichage(), "00:03");
        assert_eq!(m.tick(), None);
        assert_eq!(m.affichage(), "00:02");
        assert_eq!(m.tick(), None);
        assert_eq!(m.tick(), Some(EvenementMinuteur::Termine));
        assert_eq!(m.mode, Mode::Reglage);
        assert!(!m.en_marche);
        // le réglage est conservé pour relancer
        assert_eq!(m.affichage(), "00:03");
        assert_eq!(m.tick(), None);
    }

    #[test]
    fn pause_et_reprise() {
        let mut m = Minuteur::new(1, 0);
        m.demarrer();
        m.tick();
        m.pause();
        assert_eq!(m.tick(), None);
        assert_eq!(m.restant, 59);
        m.demarrer();
        assert_eq!(m.restant, 59);
        assert!(m.en_marche);
    }

    #[test]
    fn reglage_gele_en_decompte() {
        let mut m = Minuteur::new(2, 0);
        m.demarrer();
        m.ajuster_minutes(true);
        m.ajuster_secondes(true);
        assert_eq!((m.minutes, m.secondes), (2, 0));
        m.reinitialiser();
        m.ajuster_minutes(true);
        assert_eq!(m.minutes, 3);
        assert_eq!(m.restant, 0);
    }

    #[test]
    fn progression_pourcentage() {
        let mut m = Minuteur::new(0, 4);
        assert_eq!(m.progression(), 0.0);
        m.demarrer();
        assert_eq!(m.progression(), 0.0);
        m.tick();
        assert_eq!(m.progression(), 25.0);
    }

    #[test]
    fn format_minutes_secondes() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(5999), "99:59");
    }
}
