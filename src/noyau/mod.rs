//! Noyau des outils (sans UI)
//!
//! Organisation interne :
//! - lecture.rs       : lecture tolérante des saisies + affichage des nombres
//! - arith.rs         : évaluateur (gauche, op, droite)
//! - calculatrice.rs  : session enchaînée gauche->droite (sans priorité)
//! - conversion.rs    : tables d’unités + conversion linéaire / affine
//! - convertisseur.rs : session à deux champs (saisie, échange, catégorie)
//! - cadence.rs       : rappel périodique (démarrer / annuler)
//! - minuteur.rs      : compte à rebours
//! - chronometre.rs   : chronomètre + tours
//! - horloge.rs       : horloge mondiale (fuseaux IANA)

pub mod arith;
pub mod cadence;
pub mod calculatrice;
pub mod chronometre;
pub mod conversion;
pub mod convertisseur;
pub mod erreur;
pub mod horloge;
pub mod lecture;
pub mod minuteur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::NoyauErreur;
