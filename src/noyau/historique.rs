// src/noyau/historique.rs
//
// Journal borné des calculs réussis.
// FIFO : au-delà de CAPACITE entrées, la plus ancienne part d'abord.
// On n'ajoute QUE sur succès, avec le texte ORIGINAL de la saisie
// (avant complétion des parenthèses).

use std::collections::VecDeque;

/// Les 10 derniers calculs, comme l'outil d'origine.
pub const CAPACITE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub expression: String,
    pub resultat: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    calculs: VecDeque<Calcul>,
}

impl Historique {
    /// Ajoute en fin (le plus récent en dernier), évince en tête si plein.
    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: f64) {
        self.calculs.push_back(Calcul {
            expression: expression.into(),
            resultat,
        });
        while self.calculs.len() > CAPACITE {
            self.calculs.pop_front();
        }
    }

    /// Ordre chronologique (ancien -> récent).
    pub fn iter(&self) -> impl Iterator<Item = &Calcul> {
        self.calculs.iter()
    }

    pub fn len(&self) -> usize {
        self.calculs.len()
    }

    pub fn est_vide(&self) -> bool {
        self.calculs.is_empty()
    }
}
