// src/noyau/erreur.rs
//
// Les deux échecs visibles du noyau.
// - DivisionParZero : message dédié (cas signalé à part dans l'UI)
// - ExpressionInvalide : tout le reste (jeton inconnu, parenthèses, domaine…)
//   avec la cause en clair.
//
// Contrat : un échec n'altère jamais mémoire ni historique ; l'UI affiche
// la sentinelle "Error" et le message, rien d'autre.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("Division par zéro !")]
    DivisionParZero,

    #[error("Expression incorrecte : {0}")]
    ExpressionInvalide(String),
}

impl ErreurEval {
    /// Raccourci pour les causes construites à la volée.
    pub fn invalide(cause: impl Into<String>) -> Self {
        Self::ExpressionInvalide(cause.into())
    }
}
