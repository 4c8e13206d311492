// src/noyau/expr.rs
//
// AST arithmétique + évaluation f64
// ---------------------------------
// - Grammaire bornée : nombres, π, e, + - * / ^, appels de la table fermée.
//   Rien d'autre n'est représentable, donc rien d'autre n'est évaluable.
// - L'évaluation est une fonction pure de (expression, mode d'angle).
// - Division par un dénominateur nul => DivisionParZero (jamais un ±∞ silencieux).
//   Même contrat pour 0 ^ négatif.

use super::erreur::ErreurEval;
use super::fonctions::{Fonction, ModeAngle};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Pi,
    E,

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),

    Appel(Fonction, Box<Expr>),
}

impl Expr {
    /// Évalue l'arbre. Le mode d'angle n'est consulté qu'au point d'appel
    /// des fonctions trig (voir fonctions.rs).
    pub fn evaluer(&self, mode: ModeAngle) -> Result<f64, ErreurEval> {
        use Expr::*;

        match self {
            Num(v) => Ok(*v),
            Pi => Ok(std::f64::consts::PI),
            E => Ok(std::f64::consts::E),

            Add(a, b) => Ok(a.evaluer(mode)? + b.evaluer(mode)?),
            Sub(a, b) => Ok(a.evaluer(mode)? - b.evaluer(mode)?),
            Mul(a, b) => Ok(a.evaluer(mode)? * b.evaluer(mode)?),

            Div(a, b) => {
                let d = b.evaluer(mode)?;
                if d == 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(a.evaluer(mode)? / d)
            }

            Pow(a, b) => {
                let base = a.evaluer(mode)?;
                let exp = b.evaluer(mode)?;
                if base == 0.0 && exp < 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(base.powf(exp))
            }

            Appel(f, x) => f.appliquer(x.evaluer(mode)?, mode),
        }
    }
}
