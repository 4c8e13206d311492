//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés observables du pipeline sans faire chauffer
//! la machine.
//! - tolérance flottante explicite (EPS) partout où la trig intervient
//! - le mode d'angle est passé à CHAQUE appel : rien n'est mémorisé par expression
//! - bornes modestes pour les stress (profondeur, longueur)
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - La conversion degrés/radians se fait au point d'appel des fonctions,
//!   donc les arguments imbriqués (ex: sin(2*asin(1))) sont couverts — c'est
//!   un dépassement assumé de l'ancienne réécriture regex "argument plat".
//! - cot(x) avec tan(x) == 0 rend +∞ (politique dégénérée), PAS une erreur.

use std::f64::consts::{FRAC_PI_4, PI};

use super::erreur::ErreurEval;
use super::eval::evaluer;
use super::fonctions::ModeAngle;

const EPS: f64 = 1e-9;

fn rad(s: &str) -> f64 {
    evaluer(s, ModeAngle::Radians, true).unwrap_or_else(|e| panic!("expr={s:?} err={e}"))
}

fn deg(s: &str) -> f64 {
    evaluer(s, ModeAngle::Degres, true).unwrap_or_else(|e| panic!("expr={s:?} err={e}"))
}

fn assert_proche(obtenu: f64, attendu: f64, contexte: &str) {
    assert!(
        (obtenu - attendu).abs() < EPS,
        "{contexte}: obtenu {obtenu}, attendu {attendu}"
    );
}

/* ------------------------ Arithmétique pure ------------------------ */

#[test]
fn sci_precedence_standard() {
    assert_eq!(rad("2+3*4"), 14.0);
    assert_eq!(rad("(2+3)*4"), 20.0);
    assert_eq!(rad("100/5/2"), 10.0);
    assert_eq!(rad("2^2^3"), 256.0);
    assert_eq!(rad("7-2*3"), 1.0);
    assert_eq!(rad("5.5+4.5"), 10.0);
    assert_eq!(rad("2*-3"), -6.0); // moins unaire après opérateur
    assert_eq!(rad("2^-3"), 0.125);
}

#[test]
fn sci_glyphes_equivalents_ascii() {
    assert_eq!(rad("6×7"), rad("6*7"));
    assert_eq!(rad("9÷3"), rad("9/3"));
    assert_eq!(rad("8−5"), rad("8-5"));
}

/* ------------------------ Modes d'angle ------------------------ */

#[test]
fn sci_degres_aller_retour() {
    assert_proche(deg("sin(90)"), 1.0, "sin(90°)");
    assert_proche(deg("asin(1)"), 90.0, "asin(1) en degrés");
    assert_proche(deg("cos(60)"), 0.5, "cos(60°)");
    assert_proche(deg("tan(45)"), 1.0, "tan(45°)");
    assert_proche(deg("atan(1)"), 45.0, "atan(1) en degrés");
    assert_proche(deg("acos(0)"), 90.0, "acos(0) en degrés");
}

#[test]
fn sci_radians() {
    assert_proche(rad("sin(0)"), 0.0, "sin(0)");
    assert_proche(rad(&format!("cot({})", FRAC_PI_4)), 1.0, "cot(π/4)");
    assert_proche(rad("cos(π)"), -1.0, "cos(π)");
    assert_proche(rad("acot(1)"), FRAC_PI_4, "acot(1)");
}

#[test]
fn sci_argument_trig_imbrique_en_degres() {
    // asin(1) = 90°, puis sin(2*90°) = sin(180°) = 0 : l'imbrication marche
    // parce que la conversion vit au point d'appel, pas dans une réécriture.
    assert_proche(deg("sin(2*asin(1))"), 0.0, "sin(2*asin(1)) en degrés");
    assert_proche(deg("cos(asin(1))"), 0.0, "cos(asin(1)) en degrés");
}

#[test]
fn sci_facteur_devant_fonction() {
    // "6*sin(60)" : le cas qui avait motivé la réécriture de l'original
    assert_proche(deg("6*sin(60)"), 6.0 * (PI / 3.0).sin(), "6*sin(60°)");
}

#[test]
fn sci_cot_degenere_en_infini() {
    // tan(0) == 0 => cot(0) = +∞ — politique documentée, pas une erreur
    assert!(rad("cot(0)").is_infinite());
    assert!(deg("cot(0)").is_infinite());
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes_pi_et_e() {
    assert_proche(rad("π"), PI, "π");
    assert_proche(rad("pi"), PI, "pi");
    assert_proche(rad("e"), std::f64::consts::E, "e");
    assert_proche(rad("ln(e)"), 1.0, "ln(e)");
    assert_proche(rad("log(1000)"), 3.0, "log(1000)");
    assert_proche(rad("e^2"), std::f64::consts::E.powi(2), "e^2");
}

#[test]
fn sci_constante_e_ne_corrompt_pas_les_fonctions() {
    // "sec" contient 'e' : il doit échouer comme fonction inconnue INTACTE,
    // pas comme un mot mutilé par une substitution de constante.
    match evaluer("sec(1)", ModeAngle::Radians, true) {
        Err(ErreurEval::ExpressionInvalide(cause)) => {
            assert!(cause.contains("sec"), "cause inattendue: {cause}")
        }
        autre => panic!("attendu ExpressionInvalide, obtenu {autre:?}"),
    }
}

/* ------------------------ Échecs typés ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(
        evaluer("5/0", ModeAngle::Radians, true),
        Err(ErreurEval::DivisionParZero)
    );
    assert_eq!(
        evaluer("1/(3-3)", ModeAngle::Degres, true),
        Err(ErreurEval::DivisionParZero)
    );
}

#[test]
fn sci_invalides() {
    for s in ["2+", "sin()", ")(", "2..3", "foo(1)", "2$3"] {
        match evaluer(s, ModeAngle::Radians, true) {
            Err(ErreurEval::ExpressionInvalide(_)) => {}
            autre => panic!("expr={s:?} : attendu ExpressionInvalide, obtenu {autre:?}"),
        }
    }
}

/* ------------------------ Auto-parenthèses ------------------------ */

#[test]
fn sci_auto_parentheses() {
    // activé : "sin(30" devient "sin(30)" avant parse
    assert_proche(deg("sin(30"), 0.5, "sin(30 complété, degrés");
    assert_proche(rad("((1+2"), 3.0, "((1+2 complété");

    // coupé : même saisie => ExpressionInvalide
    assert!(matches!(
        evaluer("sin(30", ModeAngle::Degres, false),
        Err(ErreurEval::ExpressionInvalide(_))
    ));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    // 200 termes "1+1+…" : linéaire, aucune profondeur dangereuse
    let mut expr = String::from("1");
    for _ in 0..199 {
        expr.push_str("+1");
    }
    assert_eq!(rad(&expr), 200.0);
}

#[test]
fn sci_stress_parentheses_imbriquees() {
    // profondeur 100 : l'évaluation récursive doit rester loin de la pile max
    let mut expr = String::new();
    for _ in 0..100 {
        expr.push('(');
    }
    expr.push('7');
    for _ in 0..100 {
        expr.push(')');
    }
    assert_eq!(rad(&expr), 7.0);
}
