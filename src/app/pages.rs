// src/app/pages.rs
//
// Pages statiques (accueil, à propos, contact, confidentialité).
// Contenu seulement : aucune logique.

use eframe::egui;

use super::etat::Page;

pub const TITRE: &str = "QuikTools";

pub const ACCROCHE: &str =
    "Essential utilities at your fingertips. Simple, fast, and reliable tools for everyday tasks.";

/// (page, nom, description) des outils de l’accueil.
pub const OUTILS: [(Page, &str, &str); 5] = [
    (Page::Minuteur, "Timer", "Countdown timer with custom intervals"),
    (Page::Chronometre, "Stopwatch", "Precise time measurement and laps"),
    (Page::Calculatrice, "Calculator", "Basic arithmetic calculations"),
    (Page::Horloge, "World Clock", "Time zones around the world"),
    (Page::Convertisseur, "Unit Converter", "Convert between different units"),
];

/// Liens de pied de page.
pub const LIENS: [(Page, &str); 3] = [
    (Page::APropos, "About"),
    (Page::Contact, "Contact"),
    (Page::Confidentialite, "Privacy Policy"),
];

const CONTACT_EMAIL: &str = "support@quiktools.org";

struct Section {
    titre: &'static str,
    texte: &'static str,
    puces: &'static [&'static str],
}

const A_PROPOS: &[Section] = &[
    Section {
        titre: "Our Mission",
        texte: "QuikTools gathers the small utilities you reach for every day in one fast, \
                distraction-free place.",
        puces: &[],
    },
    Section {
        titre: "What We Offer",
        texte: "",
        puces: &[
            "Timer - Set custom countdown timers for any task",
            "Stopwatch - Precise time measurement with lap tracking",
            "Calculator - Quick arithmetic calculations",
            "World Clock - Track time across different time zones",
            "Unit Converter - Convert between various units of measurement",
        ],
    },
    Section {
        titre: "Why Choose QuikTools?",
        texte: "",
        puces: &[
            "Fast and responsive interface",
            "No registration required",
            "Free to use",
            "Works on all devices",
            "Privacy-focused design",
        ],
    },
];

const CONTACT: &[Section] = &[
    Section {
        titre: "Get in Touch",
        texte: "Questions, suggestions or problems: write to us, we read every message.",
        puces: &[],
    },
    Section {
        titre: "Feedback",
        texte: "Tell us which tool you would like to see next or how an existing one could work better.",
        puces: &[],
    },
    Section {
        titre: "Bug Reports",
        texte: "To help us fix an issue quickly, please include:",
        puces: &[
            "Which tool you were using",
            "What you expected to happen",
            "What actually happened",
            "Your browser and device information",
        ],
    },
];

const CONFIDENTIALITE: &[Section] = &[
    Section {
        titre: "Overview",
        texte: "Last updated: January 2025. This policy explains what happens to your data when you use QuikTools.",
        puces: &[],
    },
    Section {
        titre: "Information We Collect",
        texte: "",
        puces: &[
            "We do not require user registration or accounts",
            "We do not collect personal information",
            "Tool data (timer settings, calculations, etc.) stays on your device",
        ],
    },
    Section {
        titre: "Data Security",
        texte: "Every computation runs locally; nothing you type is sent anywhere.",
        puces: &[],
    },
    Section {
        titre: "Changes to This Policy",
        texte: "Updates will be published on this page with a new date.",
        puces: &[],
    },
];

fn sections(ui: &mut egui::Ui, sections: &[Section]) {
    for s in sections {
        ui.add_space(8.0);
        ui.heading(s.titre);
        if !s.texte.is_empty() {
            ui.label(s.texte);
        }
        for p in s.puces {
            ui.label(format!("• {p}"));
        }
    }
}

/// Contenu d’une page statique ; false si `page` n’en est pas une.
pub fn ui_page_statique(ui: &mut egui::Ui, page: Page) -> bool {
    match page {
        Page::APropos => sections(ui, A_PROPOS),
        Page::Contact => {
            sections(ui, &CONTACT[..1]);
            ui.horizontal(|ui| {
                ui.label("Email :");
                ui.hyperlink_to(CONTACT_EMAIL, format!("mailto:{CONTACT_EMAIL}"));
            });
            sections(ui, &CONTACT[1..]);
        }
        Page::Confidentialite => sections(ui, CONFIDENTIALITE),
        _ => return false,
    }
    true
}

pub fn titre_page(page: Page) -> &'static str {
    match page {
        Page::Accueil => TITRE,
        Page::APropos => "About QuikTools",
        Page::Contact => "Contact Us",
        Page::Confidentialite => "Privacy Policy",
        outil => OUTILS
            .iter()
            .find(|(p, _, _)| *p == outil)
            .map_or(TITRE, |&(_, nom, _)| nom),
    }
}
