//! Noyau calculatrice ingénieur
//!
//! Organisation interne :
//! - erreur.rs     : les deux échecs typés (division par zéro / invalide)
//! - jetons.rs     : tokenisation (glyphes ×÷−, π, e sur frontière de mot)
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST + évaluation f64
//! - fonctions.rs  : table fermée + mode d'angle (conversion au point d'appel)
//! - historique.rs : FIFO bornée des 10 derniers calculs
//! - format.rs     : mise en forme affichage/historique
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::evaluer;
pub use fonctions::ModeAngle;
pub use historique::Historique;
