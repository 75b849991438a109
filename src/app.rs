// src/app.rs
//
// QuikTools — module App (racine)
// -------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + pages.rs)
// - Ré-exporter AppOutils (pour main.rs: use crate::app::AppOutils;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Les ticks (minuteur / chronomètre / horloge) sont traités AVANT le dessin,
//   puis on demande la frame suivante juste à l’échéance : pas de repaint continu.

pub mod etat;
pub mod pages;
pub mod vue;

// Ré-export pratique : `use crate::app::AppOutils;`
pub use etat::AppOutils;

use std::time::Duration;

use eframe::egui;

use etat::Page;

impl eframe::App for AppOutils {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));

        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = "C" sur la calculatrice, retour à l’accueil ailleurs.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.page == Page::Calculatrice {
                self.calculatrice.clear();
            } else {
                self.naviguer(Page::Accueil, now);
            }
        }

        self.avancer(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, now);
        });

        // La vue a pu démarrer / annuler une cadence : délai recalculé après dessin.
        if let Some(delai) = self.avancer(now) {
            ctx.request_repaint_after(delai);
        }
    }
}
