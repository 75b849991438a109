//! Chronomètre au centième, avec tours.
//!
//! Le temps n’est jamais incrémenté tick par tick : il est recalculé depuis
//! l’horloge monotone (`now - depart`), donc insensible aux frames manquées.

use std::time::Duration;

pub const PERIODE_CHRONOMETRE: Duration = Duration::from_millis(10);

const CENTIEME: u128 = 10_000_000; // en nanosecondes

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tour {
    pub id: usize,
    /// Temps total au moment du tour (centièmes).
    pub temps: u64,
    /// Durée du tour seul (centièmes).
    pub duree: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statut {
    Pret,
    EnMarche,
    Arrete,
}

impl Statut {
    pub fn libelle(self) -> &'static str {
        match self {
            Statut::Pret => "Ready",
            Statut::EnMarche => "Running",
            Statut::Arrete => "Stopped",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chronometre {
    /// Centièmes écoulés.
    pub temps: u64,
    pub en_marche: bool,
    /// Plus récent en tête.
    pub tours: Vec<Tour>,
    depart: Duration,
    dernier_tour: u64,
}

impl Chronometre {
    /// Marche / arrêt. À la reprise, `depart` est recalé pour conserver le temps acquis.
    pub fn basculer(&mut self, now: Duration) {
        if self.en_marche {
            self.actualiser(now);
            self.en_marche = false;
        } else {
            let acquis = Duration::from_millis(self.temps * 10);
            self.depart = now.saturating_sub(acquis);
            self.en_marche = true;
        }
    }

    /// Recalcule `temps` depuis l’horloge (sans effet à l’arrêt).
    pub fn actualiser(&mut self, now: Duration) {
        if !self.en_marche {
            return;
        }
        let ecoule = now.saturating_sub(self.depart).as_nanos() / CENTIEME;
        self.temps = u64::try_from(ecoule).unwrap_or(u64::MAX);
    }

    pub fn reinitialiser(&mut self) {
        *self = Self::default();
    }

    /// Enregistre un tour (seulement en marche, et après 0).
    pub fn tour(&mut self) -> Option<Tour> {
        if !self.en_marche || self.temps == 0 {
            return None;
        }
        let t = Tour {
            id: self.tours.len() + 1,
            temps: self.temps,
            duree: self.temps - self.dernier_tour,
        };
        self.tours.insert(0, t);
        self.dernier_tour = self.temps;
        Some(t)
    }

    pub fn statut(&self) -> Statut {
        if self.en_marche {
            Statut::EnMarche
        } else if self.temps > 0 {
            Statut::Arrete
        } else {
            Statut::Pret
        }
    }
}

/// `MM:SS.cc`
pub fn format_centisecondes(cs: u64) -> String {
    let secondes = cs / 100;
    format!("{:02}:{:02}.{:02}", secondes / 60, secondes % 60, cs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn temps_depuis_horloge() {
        let mut c = Chronometre::default();
        assert_eq!(c.statut(), Statut::Pret);

        c.basculer(ms(1000));
        c.actualiser(ms(2234));
        assert_eq!(c.temps, 123);
        assert_eq!(c.statut(), Statut::EnMarche);
    }

    #[test]
    fn arret_et_reprise_conservent_le_temps() {
        let mut c = Chronometre::default();
        c.basculer(ms(0));
        c.basculer(ms(1500));
        assert_eq!(c.temps, 150);
        assert_eq!(c.statut(), Statut::Arrete);

        // pause longue : ignorée
        c.actualiser(ms(9000));
        assert_eq!(c.temps, 150);

        c.basculer(ms(10_000));
        c.actualiser(ms(10_500));
        assert_eq!(c.temps, 200);
    }

    #[test]
    fn tours_plus_recent_en_tete() {
        let mut c = Chronometre::default();
        assert_eq!(c.tour(), None);

        c.basculer(ms(0));
        assert_eq!(c.tour(), None); // temps == 0

        c.actualiser(ms(1000));
        c.tour();
        c.actualiser(ms(2500));
        c.tour();

        assert_eq!(
            c.tours,
            vec![
                Tour { id: 2, temps: 250, duree: 150 },
                Tour { id: 1, temps: 100, duree: 100 },
            ]
        );

        c.basculer(ms(3000));
        assert_eq!(c.tour(), None);
    }

    #[test]
    fn reinitialisation_complete() {
        let mut c = Chronometre::default();
        c.basculer(ms(0));
        c.actualiser(ms(700));
        c.tour();
        c.reinitialiser();
        assert_eq!(c, Chronometre::default());

        c.basculer(ms(5000));
        c.actualiser(ms(5300));
        assert_eq!(c.tour().map(|t| t.duree), Some(30));
    }

    #[test]
    fn format_affichage() {
        assert_eq!(format_centisecondes(0), "00:00.00");
        assert_eq!(format_centisecondes(123), "00:01.23");
        assert_eq!(format_centisecondes(6_105), "01:01.05");
        assert_eq!(format_centisecondes(360_000), "60:00.00");
    }
}
