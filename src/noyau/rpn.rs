// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name ∈ table fermée (fonctions.rs) => fonction unaire (postfixée en RPN)
//    - sinon => ExpressionInvalide (pas de variables dans cette calculatrice)
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, c'est le préfixe Neg :
//      "-x" => "x neg". Neg lie plus fort que * et /, moins fort que ^ :
//      "2*-3" => -6, "8/-2/2" => -2, "2^-3" => 2^(-3), "-2^2" => -(2^2)
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::fonctions::Fonction;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Identificateurs reconnus comme fonctions (unaire).
fn is_fonction_ident(name: &str) -> bool {
    Fonction::depuis_nom(name).is_some()
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Pi, Slash, Num(2), RPar]
///   rpn:    [Pi, Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Pi | Tok::E => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if !is_fonction_ident(&name) {
                    return Err(ErreurEval::invalide(format!("fonction inconnue: '{name}'")));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(Tok::Ident(name));
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante_vue = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_vue = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_vue {
                    return Err(ErreurEval::invalide(
                        "parenthèse fermante sans ouvrante".to_string(),
                    ));
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Tok::Ident(name)) = ops.last() {
                    if is_fonction_ident(name.as_str()) {
                        out.push(ops.pop().unwrap());
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if let Tok::Ident(name) = top {
                        if is_fonction_ident(name.as_str()) {
                            break;
                        }
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                // moins unaire : pas de valeur avant => préfixe Neg.
                // Un préfixe s'empile sans rien dépiler (son opérande n'est
                // pas encore arrivé) ; "--2" en empile deux.
                if !prev_was_value {
                    ops.push(Tok::Neg);
                    continue;
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if let Tok::Ident(name) = top {
                        if is_fonction_ident(name.as_str()) {
                            break;
                        }
                    }
                    if precedence(top) >= precedence(&Tok::Minus) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Tok::Minus);
                prev_was_value = false;
            }

            // Neg n'existe pas en entrée (il naît ici même) ; s'il passe
            // quand même, on le traite comme le préfixe qu'il est.
            Tok::Neg => {
                ops.push(Tok::Neg);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::invalide("parenthèses non fermées".to_string()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// - Ident(name): fonction unaire de la table fermée, sinon erreur.
/// - Arité vérifiée par la pile : un opérande manquant (fonction sans
///   argument, opérateur orphelin) est une ExpressionInvalide.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Num(v)),
            Tok::Pi => st.push(Expr::Pi),
            Tok::E => st.push(Expr::E),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEval::invalide("expression invalide".to_string()))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEval::invalide("expression invalide".to_string()))?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::Neg => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::invalide("expression invalide".to_string()))?;
                st.push(Expr::Sub(Box::new(Expr::Num(0.0)), Box::new(x)));
            }

            Tok::Ident(name) => {
                let f = Fonction::depuis_nom(name.as_str())
                    .ok_or_else(|| ErreurEval::invalide(format!("fonction inconnue: '{name}'")))?;
                let x = st.pop().ok_or_else(|| {
                    ErreurEval::invalide(format!("fonction sans argument: '{name}'"))
                })?;
                st.push(Expr::Appel(f, Box::new(x)));
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::invalide(
                    "parenthèse inattendue en RPN".to_string(),
                ))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::invalide("expression invalide".to_string()));
    }
    Ok(st.pop().unwrap())
}
