//! Cadence : rappel périodique piloté par l’horloge monotone de l’UI.
//!
//! Pas de thread ni de minuterie système : la boucle d’événements interroge
//! `ticks_dus(now)` à chaque frame et programme la frame suivante avec `delai(now)`.
//! `now` = temps écoulé depuis le démarrage de l’application.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cadence {
    periode: Duration,
    /// Échéance du prochain tick ; `None` = annulée.
    prochaine: Option<Duration>,
}

impl Cadence {
    /// Période nulle interdite : ramenée à 1 ms.
    pub fn new(periode: Duration) -> Self {
        Self {
            periode: periode.max(Duration::from_millis(1)),
            prochaine: None,
        }
    }

    /// (Re)démarre : premier tick une période après `now`.
    pub fn demarrer(&mut self, now: Duration) {
        self.prochaine = Some(now + self.periode);
    }

    /// Idempotent.
    pub fn annuler(&mut self) {
        self.prochaine = None;
    }

    pub fn est_active(&self) -> bool {
        self.prochaine.is_some()
    }

    /// Nombre de périodes entières échues depuis le dernier appel.
    ///
    /// Avance l’échéance d’autant : une frame en retard rattrape les ticks manqués.
    pub fn ticks_dus(&mut self, now: Duration) -> u32 {
        let Some(echeance) = self.prochaine else {
            return 0;
        };
        if now < echeance {
            return 0;
        }

        let retard = now - echeance;
        let n = retard.as_nanos() / self.periode.as_nanos() + 1;
        let n = u32::try_from(n).unwrap_or(u32::MAX);

        self.prochaine = Some(echeance + self.periode * n);
        n
    }

    /// Temps restant avant le prochain tick (zéro si déjà échu).
    pub fn delai(&self, now: Duration) -> Option<Duration> {
        self.prochaine.map(|e| e.saturating_sub(now))
    }
}
