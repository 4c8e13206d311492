// src/noyau/fonctions.rs
//
// Table fermée des fonctions + mode d'angle
// -----------------------------------------
// - La conversion degrés/radians se fait ICI, au point d'appel :
//   trig directe  : argument degrés -> radians
//   trig inverse  : résultat radians -> degrés
//   (donc les arguments imbriqués marchent, aucune réécriture textuelle)
// - cot/acot n'existent pas dans std : définies à la main.
//   cot(x) = 1/tan(x), et si tan(x) vaut exactement 0 on rend +∞
//   (valeur dégénérée documentée, PAS une erreur).
//   acot(x) = π/2 − atan(x).

use std::f64::consts::FRAC_PI_2;

use super::erreur::ErreurEval;

/// Interprétation des angles pour la trig. Consulté seulement à l'évaluation,
/// jamais mémorisé par expression.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModeAngle {
    #[default]
    Radians,
    Degres,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Radians => ModeAngle::Degres,
            ModeAngle::Degres => ModeAngle::Radians,
        }
    }

    /// Étiquette courte pour l'indicateur de mode (comme l'outil d'origine).
    pub fn etiquette(self) -> &'static str {
        match self {
            ModeAngle::Radians => "rad",
            ModeAngle::Degres => "deg",
        }
    }
}

/// Table fermée : rien d'autre n'est appelable par l'évaluateur.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Acot,
    Sqrt,
    Ln,
    Log,
}

impl Fonction {
    /// Reconnaît un identifiant (déjà en minuscules) de la table.
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        use Fonction::*;
        Some(match nom {
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "cot" => Cot,
            "asin" => Asin,
            "acos" => Acos,
            "atan" => Atan,
            "acot" => Acot,
            "sqrt" => Sqrt,
            "ln" => Ln,
            "log" => Log,
            _ => return None,
        })
    }

    pub fn nom(self) -> &'static str {
        use Fonction::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Cot => "cot",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Acot => "acot",
            Sqrt => "sqrt",
            Ln => "ln",
            Log => "log",
        }
    }

    /// Applique la fonction à une valeur, en honorant le mode d'angle.
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> Result<f64, ErreurEval> {
        use Fonction::*;

        match self {
            // trig directe : argument converti si mode Degres
            Sin | Cos | Tan | Cot => {
                let a = match mode {
                    ModeAngle::Radians => x,
                    ModeAngle::Degres => x.to_radians(),
                };
                Ok(match self {
                    Sin => a.sin(),
                    Cos => a.cos(),
                    Tan => a.tan(),
                    Cot => cot(a),
                    _ => unreachable!(),
                })
            }

            // trig inverse : résultat converti si mode Degres
            Asin | Acos | Atan | Acot => {
                let r = match self {
                    Asin => {
                        verifier_domaine((-1.0..=1.0).contains(&x), self, x)?;
                        x.asin()
                    }
                    Acos => {
                        verifier_domaine((-1.0..=1.0).contains(&x), self, x)?;
                        x.acos()
                    }
                    Atan => x.atan(),
                    Acot => acot(x),
                    _ => unreachable!(),
                };
                Ok(match mode {
                    ModeAngle::Radians => r,
                    ModeAngle::Degres => r.to_degrees(),
                })
            }

            Sqrt => {
                verifier_domaine(x >= 0.0, self, x)?;
                Ok(x.sqrt())
            }
            Ln => {
                verifier_domaine(x > 0.0, self, x)?;
                Ok(x.ln())
            }
            Log => {
                verifier_domaine(x > 0.0, self, x)?;
                Ok(x.log10())
            }
        }
    }
}

/// cot(x) = 1/tan(x) ; tan(x) == 0 => +∞ (politique dégénérée, pas d'erreur).
fn cot(x: f64) -> f64 {
    let t = x.tan();
    if t == 0.0 {
        f64::INFINITY
    } else {
        1.0 / t
    }
}

/// acot(x) = π/2 − atan(x)
fn acot(x: f64) -> f64 {
    FRAC_PI_2 - x.atan()
}

fn verifier_domaine(ok: bool, f: Fonction, x: f64) -> Result<(), ErreurEval> {
    if ok {
        Ok(())
    } else {
        Err(ErreurEval::invalide(format!(
            "argument hors domaine pour {}: {x}",
            f.nom()
        )))
    }
}
