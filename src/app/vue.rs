// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppOutils (etat.rs) pour natif + wasm
// - Une fonction ui_* par page, l’état ne change que via les méthodes du noyau
// - Calculatrice : pavé tactile + clavier (chiffres, opérateurs, Enter)
//
// Note :
// - `now` vient de `input.time` (monotone, disponible aussi en wasm)
// - l’instant mural de l’horloge vient de chrono (Date JS en wasm)

use std::time::Duration;

use eframe::egui;

use super::etat::{AppOutils, Page};
use super::pages::{self, ACCROCHE, LIENS, OUTILS, TITRE};
use crate::noyau::calculatrice::PAVE;
use crate::noyau::chronometre::format_centisecondes;
use crate::noyau::conversion::Categorie;
use crate::noyau::horloge::{decalage, ecart_horaire, format_date, format_heure, Zone};
use crate::noyau::minuteur::Mode;

const TAILLE_AFFICHAGE: f32 = 40.0;

// Libellés de boutons : uniquement des glyphes couverts par les polices egui par défaut.
const BOUTON_RETOUR: &str = "Back";
const BOUTON_ECHANGE: &str = "Swap";
const BOUTON_MOINS: &str = "−";

impl AppOutils {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, now: Duration) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui, now);
                self.ui_notification(ui);

                ui.add_space(8.0);

                match self.page {
                    Page::Accueil => self.ui_accueil(ui, now),
                    Page::Minuteur => self.ui_minuteur(ui, now),
                    Page::Chronometre => self.ui_chronometre(ui, now),
                    Page::Calculatrice => self.ui_calculatrice(ui),
                    Page::Horloge => self.ui_horloge(ui),
                    Page::Convertisseur => self.ui_convertisseur(ui),
                    statique => {
                        pages::ui_page_statique(ui, statique);
                    }
                }

                ui.add_space(16.0);
                ui.separator();
                self.ui_pied(ui, now);
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui, now: Duration) {
        ui.horizontal(|ui| {
            if self.page != Page::Accueil && ui.button(BOUTON_RETOUR).clicked() {
                self.naviguer(Page::Accueil, now);
            }
            ui.heading(pages::titre_page(self.page));
        });
    }

    fn ui_notification(&self, ui: &mut egui::Ui) {
        let Some(n) = &self.notification else {
            return;
        };
        egui::Frame::group(ui.style())
            .fill(ui.visuals().selection.bg_fill)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.strong(&n.titre);
                ui.label(&n.detail);
            });
    }

    fn ui_pied(&mut self, ui: &mut egui::Ui, now: Duration) {
        ui.horizontal_wrapped(|ui| {
            for (page, libelle) in LIENS {
                if ui.link(libelle).clicked() {
                    self.naviguer(page, now);
                }
            }
        });
    }

    /* ------------------------ Accueil ------------------------ */

    fn ui_accueil(&mut self, ui: &mut egui::Ui, now: Duration) {
        ui.label(ACCROCHE);
        ui.add_space(8.0);

        for (page, nom, description) in OUTILS {
            let clic = egui::Frame::group(ui.style())
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    let titre = ui.add(
                        egui::Label::new(egui::RichText::new(nom).strong().size(18.0))
                            .sense(egui::Sense::click()),
                    );
                    ui.label(description);
                    titre.clicked()
                })
                .inner;
            if clic {
                self.naviguer(page, now);
            }
        }

        ui.add_space(4.0);
        ui.weak(format!("{TITRE} v{}", env!("CARGO_PKG_VERSION")));
    }

    /* ------------------------ Minuteur ------------------------ */

    fn ui_minuteur(&mut self, ui: &mut egui::Ui, now: Duration) {
        Self::affichage_grand(ui, &self.minuteur.affichage());

        if self.minuteur.mode == Mode::Decompte {
            ui.label(if self.minuteur.en_marche {
                "Running"
            } else {
                "Paused"
            });
        }

        ui.add(
            egui::ProgressBar::new(self.minuteur.progression() / 100.0)
                .desired_width(ui.available_width()),
        );

        if self.minuteur.mode == Mode::Reglage {
            ui.add_space(6.0);
            egui::Grid::new("reglage_minuteur")
                .num_columns(4)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Minutes");
                    if ui.button(BOUTON_MOINS).clicked() {
                        self.minuteur.ajuster_minutes(false);
                    }
                    ui.monospace(format!("{:02}", self.minuteur.minutes));
                    if ui.button("+").clicked() {
                        self.minuteur.ajuster_minutes(true);
                    }
                    ui.end_row();

                    ui.label("Seconds");
                    if ui.button(BOUTON_MOINS).clicked() {
                        self.minuteur.ajuster_secondes(false);
                    }
                    ui.monospace(format!("{:02}", self.minuteur.secondes));
                    if ui.button("+").clicked() {
                        self.minuteur.ajuster_secondes(true);
                    }
                    ui.end_row();
                });
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let libelle = if self.minuteur.en_marche { "Pause" } else { "Start" };
            let marche = ui.add_enabled(
                self.minuteur.peut_demarrer(),
                egui::Button::new(libelle).min_size(egui::vec2(96.0, 32.0)),
            );
            if marche.clicked() {
                self.minuteur_basculer(now);
            }
            if ui
                .add(egui::Button::new("Reset").min_size(egui::vec2(96.0, 32.0)))
                .clicked()
            {
                self.minuteur_reinitialiser();
            }
        });
    }

    /* ------------------------ Chronomètre ------------------------ */

    fn ui_chronometre(&mut self, ui: &mut egui::Ui, now: Duration) {
        Self::affichage_grand(ui, &format_centisecondes(self.chronometre.temps));
        ui.label(self.chronometre.statut().libelle());

        ui.horizontal(|ui| {
            let libelle = if self.chronometre.en_marche { "Stop" } else { "Start" };
            if ui
                .add(egui::Button::new(libelle).min_size(egui::vec2(96.0, 32.0)))
                .clicked()
            {
                self.chronometre_basculer(now);
            }
            if self.chronometre.en_marche
                && ui
                    .add(egui::Button::new("Lap").min_size(egui::vec2(96.0, 32.0)))
                    .clicked()
            {
                self.chronometre.actualiser(now);
                self.chronometre.tour();
            }
            if ui
                .add(egui::Button::new("Reset").min_size(egui::vec2(96.0, 32.0)))
                .clicked()
            {
                self.chronometre_reinitialiser();
            }
        });

        if self.chronometre.tours.is_empty() {
            return;
        }

        ui.add_space(8.0);
        ui.strong("Laps");
        egui::Grid::new("tours_chronometre")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for t in &self.chronometre.tours {
                    ui.label(format!("Lap {}", t.id));
                    ui.monospace(format_centisecondes(t.duree));
                    ui.weak(format_centisecondes(t.temps));
                    ui.end_row();
                }
            });
    }

    /* ------------------------ Calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        self.clavier_calculatrice(ui);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.calculatrice.affichage)
                            .monospace()
                            .size(TAILLE_AFFICHAGE),
                    );
                });
            });

        ui.add_space(8.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for etiquette in ligne {
                        if etiquette.is_empty() {
                            ui.label("");
                            continue;
                        }
                        let resp = ui.add_sized([64.0, 48.0], egui::Button::new(etiquette));
                        if resp.clicked() {
                            self.calculatrice.touche(etiquette);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Clavier : chiffres / point / opérateurs / % en texte, Enter = "=".
    ///
    /// Ignoré si un champ texte a le focus.
    fn clavier_calculatrice(&mut self, ui: &mut egui::Ui) {
        if ui.ctx().wants_keyboard_input() {
            return;
        }

        let (textes, entree) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (textes, i.key_pressed(egui::Key::Enter))
        });

        let etiquettes: Vec<String> = textes
            .iter()
            .flat_map(|t| t.chars())
            .map(String::from)
            .collect();
        self.calculatrice
            .touches(etiquettes.iter().map(String::as_str));
        if entree {
            self.calculatrice.touche("=");
        }
    }

    /* ------------------------ Horloge ------------------------ */

    fn ui_horloge(&self, ui: &mut egui::Ui) {
        let maintenant = chrono::Utc::now();
        let local = decalage(maintenant, Zone::Locale);

        for (i, f) in self.fuseaux.iter().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.strong(&f.nom);
                    if f.pays.is_empty() {
                        ui.weak(&f.ville);
                    } else {
                        ui.weak(format!("{}, {}", f.ville, f.pays));
                    }
                    if i != 0 {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(ecart_horaire(maintenant, f.zone, local));
                        });
                    }
                });
                ui.label(
                    egui::RichText::new(format_heure(maintenant, f.zone))
                        .monospace()
                        .size(24.0),
                );
                ui.weak(format_date(maintenant, f.zone));
                if i == 0 {
                    ui.small("Your Local Time");
                }
            });
        }

        ui.add_space(6.0);
        ui.small(
            "Times update automatically every second. \
             Time differences are relative to your local time.",
        );
    }

    /* ------------------------ Convertisseur ------------------------ */

    fn ui_convertisseur(&mut self, ui: &mut egui::Ui) {
        let categorie_avant = self.convertisseur.categorie;
        let mut categorie = categorie_avant;

        ui.label("Category");
        egui::ComboBox::from_id_salt("categorie_conversion")
            .selected_text(categorie.nom())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for c in Categorie::TOUTES {
                    ui.selectable_value(&mut categorie, c, c.nom());
                }
            });
        if categorie != categorie_avant {
            tracing::debug!(categorie = categorie.cle(), "changement de catégorie");
            self.convertisseur.changer_categorie(categorie);
        }

        ui.add_space(6.0);
        ui.label("From");
        ui.horizontal(|ui| {
            let mut texte = self.convertisseur.valeur_de.clone();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut texte)
                    .hint_text("Enter value")
                    .desired_width(ui.available_width() - 140.0),
            );
            if resp.changed() {
                self.convertisseur.saisir_de(texte);
            }
            let courante = self.convertisseur.unite_de;
            if let Some(cle) = Self::choix_unite(ui, "unite_de", categorie, courante) {
                self.choisir_unite(cle, true);
            }
        });

        ui.vertical_centered(|ui| {
            if ui.button(BOUTON_ECHANGE).on_hover_text("Swap units").clicked() {
                self.convertisseur.swap();
            }
        });

        ui.label("To");
        ui.horizontal(|ui| {
            let mut texte = self.convertisseur.valeur_vers.clone();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut texte)
                    .hint_text("Result")
                    .desired_width(ui.available_width() - 140.0),
            );
            if resp.changed() {
                self.convertisseur.saisir_vers(texte);
            }
            let courante = self.convertisseur.unite_vers;
            if let Some(cle) = Self::choix_unite(ui, "unite_vers", categorie, courante) {
                self.choisir_unite(cle, false);
            }
        });

        if let Some(resume) = self.convertisseur.resume() {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.weak("Conversion Result");
                ui.monospace(resume);
            });
        }
    }

    /// Sélecteur d’unité ; renvoie la nouvelle clé si elle a changé.
    fn choix_unite(
        ui: &mut egui::Ui,
        id: &str,
        categorie: Categorie,
        courante: &'static str,
    ) -> Option<&'static str> {
        let mut cle = courante;
        let nom = categorie.unite(courante).map_or(courante, |u| u.nom);

        egui::ComboBox::from_id_salt(id)
            .selected_text(nom)
            .width(128.0)
            .show_ui(ui, |ui| {
                for u in categorie.unites() {
                    ui.selectable_value(&mut cle, u.cle, u.nom);
                }
            });

        (cle != courante).then_some(cle)
    }

    fn choisir_unite(&mut self, cle: &str, de: bool) {
        let r = if de {
            self.convertisseur.choisir_unite_de(cle)
        } else {
            self.convertisseur.choisir_unite_vers(cle)
        };
        if let Err(e) = r {
            tracing::warn!(error = %e, "unité refusée");
        }
    }

    /* ------------------------ Helpers ------------------------ */

    fn affichage_grand(ui: &mut egui::Ui, texte: &str) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(texte)
                    .monospace()
                    .size(TAILLE_AFFICHAGE * 1.4),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn libelles_sans_glyphe_manquant() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |_| {});

        let pave = PAVE.iter().flatten().copied();
        let libelles = [BOUTON_RETOUR, BOUTON_ECHANGE, BOUTON_MOINS, "+"]
            .into_iter()
            .chain(pave);

        let police = egui::FontId::proportional(14.0);
        ctx.fonts_mut(|f| {
            for l in libelles {
                assert!(f.has_glyphs(&police, l), "glyphe manquant dans {l:?}");
            }
        });
    }
}
