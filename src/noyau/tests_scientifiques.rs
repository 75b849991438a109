//! Tests scientifiques (campagne) : invariants numériques du noyau.
//!
//! - arithmétique : identique à l’IEEE 754 (aucune correction cachée) ;
//! - conversions linéaires : aller-retour A->B->A à 1e-6 relatif près ;
//! - température : points fixes + aller-retour ;
//! - sessions : enchaînement sans priorité, échange = ré-étiquetage.

use proptest::prelude::*;

use super::arith::{apply, Operateur};
use super::calculatrice::Calculatrice;
use super::conversion::{convert, Categorie};
use super::convertisseur::Convertisseur;

const ECHANTILLONS: [f64; 4] = [0.0, 1.0, 100.0, 0.001];

fn proche(a: f64, b: f64, rel: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel * a.abs().max(b.abs())
}

fn aller_retour(x: f64, de: &str, vers: &str, cat: Categorie) -> f64 {
    let y = convert(x, de, vers, cat).unwrap().unwrap();
    convert(y, vers, de, cat).unwrap().unwrap()
}

/* ------------------------ Conversions ------------------------ */

#[test]
fn sci_aller_retour_toutes_paires_lineaires() {
    for cat in [Categorie::Longueur, Categorie::Masse, Categorie::Volume] {
        for a in cat.unites() {
            for b in cat.unites() {
                for x in ECHANTILLONS {
                    let r = aller_retour(x, a.cle, b.cle, cat);
                    assert!(
                        proche(r, x, 1e-6),
                        "cat={cat:?} {}->{}->{} x={x} r={r}",
                        a.cle,
                        b.cle,
                        a.cle
                    );
                }
            }
        }
    }
}

#[test]
fn sci_temperature_points_fixes() {
    let t = Categorie::Temperature;
    assert_eq!(convert(0.0, "c", "f", t), Ok(Some(32.0)));
    assert_eq!(convert(100.0, "c", "f", t), Ok(Some(212.0)));
    assert_eq!(convert(0.0, "c", "k", t), Ok(Some(273.15)));
}

#[test]
fn sci_temperature_aller_retour() {
    let t = Categorie::Temperature;
    for a in t.unites() {
        for b in t.unites() {
            for x in [-40.0, 0.0, 37.5, 100.0, 273.15] {
                let r = aller_retour(x, a.cle, b.cle, t);
                assert!((r - x).abs() < 1e-9, "{}->{} x={x} r={r}", a.cle, b.cle);
            }
        }
    }
}

/* ------------------------ Sessions ------------------------ */

#[test]
fn sci_enchainement_gauche_droite() {
    let mut c = Calculatrice::default();
    c.touches(["2", "+", "3", "×", "4", "="]);
    assert_eq!(c.affichage, "20");

    c.clear();
    c.touches(["1", "0", "-", "4", "÷", "2", "="]);
    assert_eq!(c.affichage, "3");
}

#[test]
fn sci_echange_puis_changement_categorie() {
    let mut conv = Convertisseur::default();
    conv.saisir_de("2.5");
    let avant = (conv.valeur_de.clone(), conv.valeur_vers.clone());

    conv.swap();
    conv.swap();
    assert_eq!((conv.valeur_de.clone(), conv.valeur_vers.clone()), avant);
    assert_eq!((conv.unite_de, conv.unite_vers), ("m", "ft"));

    for cat in Categorie::TOUTES {
        conv.changer_categorie(cat);
        let (de, vers) = cat.paire_par_defaut();
        assert_eq!((conv.unite_de, conv.unite_vers), (de, vers));
        assert!(conv.valeur_de.is_empty() && conv.valeur_vers.is_empty());
    }
}

/* ------------------------ Propriétés ------------------------ */

fn op_fini() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
    ]
}

fn unite_lineaire() -> impl Strategy<Value = (Categorie, usize, usize)> {
    prop_oneof![
        Just(Categorie::Longueur),
        Just(Categorie::Masse),
        Just(Categorie::Volume),
    ]
    .prop_flat_map(|cat| {
        let n = cat.unites().len();
        (Just(cat), 0..n, 0..n)
    })
}

proptest! {
    #[test]
    fn prop_apply_ieee(a in -1e12f64..1e12, b in -1e12f64..1e12, op in op_fini()) {
        let attendu = match op {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            _ => a * b,
        };
        prop_assert_eq!(apply(a, b, op), attendu);
    }

    #[test]
    fn prop_egal_identite(a in any::<f64>(), b in -1e300f64..1e300) {
        prop_assert_eq!(apply(a, b, Operateur::Egal), b);
    }

    #[test]
    fn prop_aller_retour_lineaire(x in -1e9f64..1e9, (cat, i, j) in unite_lineaire()) {
        let u = cat.unites();
        let r = aller_retour(x, u[i].cle, u[j].cle, cat);
        prop_assert!(proche(r, x, 1e-6), "x={} r={}", x, r);
    }

    #[test]
    fn prop_unaires_sans_effet_sur_la_chaine(n in 0u32..100_000, neg in any::<bool>()) {
        let mut c = Calculatrice::default();
        c.touches(["7", "×"]);
        for ch in n.to_string().chars() {
            c.saisir_chiffre(ch);
        }
        let (precedent, operation) = (c.precedent, c.operation);
        if neg { c.negate() } else { c.percent() }
        prop_assert_eq!(c.precedent, precedent);
        prop_assert_eq!(c.operation, operation);
    }
}
