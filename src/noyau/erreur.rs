// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Seules les clés inconnues (catégorie / unité) sont des erreurs :
/// un résultat non fini (÷0) reste une valeur numérique valide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoyauErreur {
    #[error("catégorie inconnue : {0:?}")]
    CategorieInconnue(String),

    #[error("unité inconnue {unite:?} dans la catégorie {categorie}")]
    UniteInconnue {
        categorie: &'static str,
        unite: String,
    },

    #[error("fuseau horaire inconnu : {0:?}")]
    FuseauInconnu(String),
}
