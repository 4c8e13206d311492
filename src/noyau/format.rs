// src/noyau/format.rs
//
// Mise en forme pour l'affichage.
// Le f64 s'affiche tel quel (Display) : "14" pour 14.0, "2.5", "inf"…
// On ne maquille pas le bruit flottant (0.30000000000000004 reste visible,
// comme dans l'outil d'origine).

use super::historique::Calcul;

/// Résultat -> texte d'affichage.
pub fn formater_resultat(v: f64) -> String {
    format!("{v}")
}

/// Ligne numérotée de la fenêtre historique : "3. 2+2 = 4".
pub fn formater_ligne_historique(numero: usize, calcul: &Calcul) -> String {
    format!(
        "{numero}. {} = {}",
        calcul.expression,
        formater_resultat(calcul.resultat)
    )
}
