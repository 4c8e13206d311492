//! Noyau — évaluation (pipeline réel)
//!
//! complète parenthèses (si auto) -> tokenize -> RPN -> Expr -> f64
//!
//! Remarque : la conversion degrés/radians n'apparaît PAS ici — elle vit au
//! point d'appel des fonctions (fonctions.rs), ce qui couvre les arguments
//! imbriqués sans réécriture textuelle.

use super::erreur::ErreurEval;
use super::fonctions::ModeAngle;
use super::jetons::{format_jetons, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression saisie et retourne le résultat f64.
///
/// - `auto_parentheses` : si vrai, les '(' non fermées sont complétées
///   AVANT le parse (moitié évaluation de la fonctionnalité auto-parenthèses,
///   l'autre moitié étant l'insertion `nom()` côté UI).
/// - Échec : `DivisionParZero` ou `ExpressionInvalide` ; jamais de panique,
///   jamais de NaN rendu à l'appelant.
pub fn evaluer(
    entree: &str,
    mode: ModeAngle,
    auto_parentheses: bool,
) -> Result<f64, ErreurEval> {
    let s = entree.trim();
    if s.is_empty() {
        return Err(ErreurEval::invalide("entrée vide".to_string()));
    }

    // 1) Complétion des parenthèses (optionnelle)
    let complet = if auto_parentheses {
        completer_parentheses(s)
    } else {
        s.to_string()
    };

    // 2) Jetons
    let jetons = tokenize(&complet)?;
    log::debug!("jetons: {}", format_jetons(&jetons));

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    log::debug!("rpn: {}", format_jetons(&rpn));

    // 4) AST + évaluation
    let v = from_rpn(&rpn)?.evaluer(mode)?;

    // NaN résiduel (ex: ∞ − ∞ via cot) : invalide plutôt qu'un affichage absurde.
    if v.is_nan() {
        return Err(ErreurEval::invalide("résultat indéfini".to_string()));
    }

    Ok(v)
}

/// Ajoute une ')' par '(' non fermée. Ne touche à rien d'autre :
/// une ')' excédentaire reste une erreur de parse.
fn completer_parentheses(s: &str) -> String {
    let ouvrantes = s.chars().filter(|&c| c == '(').count();
    let fermantes = s.chars().filter(|&c| c == ')').count();

    let mut out = s.to_string();
    for _ in fermantes..ouvrantes {
        out.push(')');
    }
    out
}
