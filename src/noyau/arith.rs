// src/noyau/arith.rs
//
// Évaluateur arithmétique : (gauche, opérateur, droite) -> nombre.
// Aucune priorité ici : l’enchaînement gauche->droite est géré par calculatrice.rs.

/// Opérateurs binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    /// Identité sur l’opérande droit : termine une chaîne.
    Egal,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Egal,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Egal => "=",
        }
    }

    /// Symbole de touche -> opérateur (`*` et `/` acceptés pour le clavier).
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "*" => Some(Operateur::Fois),
            "/" => Some(Operateur::Divise),
            _ => Self::TOUS.into_iter().find(|op| op.symbole() == s),
        }
    }
}

/// Applique `op` à (first, second).
///
/// La division par zéro n’est pas interceptée : `Infinity` / `NaN` remontent
/// tels quels, à l’appelant de les afficher.
pub fn apply(first: f64, second: f64, op: Operateur) -> f64 {
    match op {
        Operateur::Plus => first + second,
        Operateur::Moins => first - second,
        Operateur::Fois => first * second,
        Operateur::Divise => first / second,
        Operateur::Egal => second,
    }
}
