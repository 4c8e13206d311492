//! src/app/etat.rs
//!
//! État de session + opérations.
//!
//! Rôle : contenir tout l'état mutable de la calculatrice (affichage, mémoire,
//! historique, mode d'angle, auto-parenthèses) et offrir les opérations de
//! session. Seul `calculer()` touche au noyau — tout le reste est de la pure
//! manipulation d'état, sans parsing.
//!
//! Contrats :
//! - Un échec d'évaluation pose la sentinelle "Error" sur l'affichage et ne
//!   touche NI la mémoire NI l'historique.
//! - MS/M+ sur un affichage non numérique : la mémoire reste inchangée.
//! - La bascule de mode d'angle ne ré-évalue rien.

use crate::noyau::format::formater_resultat;
use crate::noyau::{evaluer, Historique, ModeAngle};

/// Sentinelle d'affichage après échec (remplacée par la prochaine saisie).
pub const AFFICHAGE_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage (une seule ligne, expression OU dernier résultat) ---
    pub affichage: String,

    // --- état de session ---
    pub memoire: f64,
    pub dernier_resultat: f64,
    pub historique: Historique,
    pub mode_angle: ModeAngle,
    pub auto_parentheses: bool,

    // --- sorties annexes ---
    pub erreur: String, // message sous l'affichage (vide si tout va bien)

    // --- UX ---
    pub montrer_historique: bool,
    pub plein_ecran: bool,
    // Permet à vue.rs de redonner le focus au champ après un clic sur un bouton.
    pub focus_affichage: bool,
    // Position (en chars) où la vue doit poser le curseur : entre les
    // parenthèses après l'insertion d'une fonction en mode auto.
    pub curseur_demande: Option<usize>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            memoire: 0.0,
            dernier_resultat: 0.0,
            historique: Historique::default(),
            mode_angle: ModeAngle::Radians,
            auto_parentheses: true,
            erreur: String::new(),
            montrer_historique: false,
            plein_ecran: false,
            focus_affichage: true, // au lancement, on veut pouvoir taper tout de suite
            curseur_demande: None,
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre/opérateur/symbole. "0" et "Error" sont remplacés,
    /// sinon on appond.
    pub fn saisir(&mut self, txt: &str) {
        if self.affichage == "0" || self.affichage == AFFICHAGE_ERREUR {
            self.affichage = txt.to_string();
        } else {
            self.affichage.push_str(txt);
        }
        self.focus_affichage = true;
    }

    /// Insère un nom de fonction. En mode auto : "nom()" avec le curseur entre
    /// les parenthèses ; sinon juste "nom(".
    pub fn inserer_fonction(&mut self, nom: &str) {
        if self.affichage == "0" || self.affichage == AFFICHAGE_ERREUR {
            self.affichage.clear();
        }

        if self.auto_parentheses {
            self.affichage.push_str(nom);
            self.affichage.push_str("()");
            self.curseur_demande = Some(self.affichage.chars().count() - 1);
        } else {
            self.affichage.push_str(nom);
            self.affichage.push('(');
        }
        self.focus_affichage = true;
    }

    /// C : remise à zéro de l'affichage.
    pub fn effacer_tout(&mut self) {
        self.affichage = "0".to_string();
        self.erreur.clear();
        self.focus_affichage = true;
    }

    /// CE / Backspace : retire le dernier caractère (plancher "0").
    pub fn effacer_dernier(&mut self) {
        if self.affichage == AFFICHAGE_ERREUR {
            self.affichage = "0".to_string();
        } else {
            self.affichage.pop();
            if self.affichage.is_empty() {
                self.affichage = "0".to_string();
            }
        }
        self.focus_affichage = true;
    }

    /// Filet après édition clavier : un champ vidé redevient "0".
    pub fn normaliser_affichage(&mut self) {
        if self.affichage.is_empty() {
            self.affichage = "0".to_string();
        }
    }

    /* ------------------------ Valeur courante ------------------------ */

    /// Lecture numérique de l'affichage ("Error", expressions non réduites => None).
    pub fn valeur_affichee(&self) -> Option<f64> {
        self.affichage.trim().parse::<f64>().ok()
    }

    fn poser_erreur_affichage(&mut self) {
        self.affichage = AFFICHAGE_ERREUR.to_string();
        self.focus_affichage = true;
    }

    /* ------------------------ Opérations unaires ------------------------ */

    /// ± : négation de la valeur affichée.
    pub fn negatif(&mut self) {
        match self.valeur_affichee() {
            Some(v) => self.affichage = formater_resultat(-v),
            None => self.poser_erreur_affichage(),
        }
        self.focus_affichage = true;
    }

    /// 1/x : inverse ; zéro => "Error".
    pub fn inverse(&mut self) {
        match self.valeur_affichee() {
            Some(v) if v != 0.0 => self.affichage = formater_resultat(1.0 / v),
            _ => self.poser_erreur_affichage(),
        }
        self.focus_affichage = true;
    }

    /// x² : carré de la valeur affichée.
    pub fn carre(&mut self) {
        match self.valeur_affichee() {
            Some(v) => self.affichage = formater_resultat(v * v),
            None => self.poser_erreur_affichage(),
        }
        self.focus_affichage = true;
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MS : écrase la mémoire avec la valeur affichée (silencieux si non numérique).
    pub fn memoire_enregistrer(&mut self) {
        if let Some(v) = self.valeur_affichee() {
            self.memoire = v;
        }
        self.focus_affichage = true;
    }

    /// MR : remplace l'affichage par la mémoire.
    pub fn memoire_rappeler(&mut self) {
        self.affichage = formater_resultat(self.memoire);
        self.focus_affichage = true;
    }

    /// MC : remise à zéro de la mémoire.
    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
        self.focus_affichage = true;
    }

    /// M+ : accumule (silencieux si non numérique).
    pub fn memoire_ajouter(&mut self) {
        if let Some(v) = self.valeur_affichee() {
            self.memoire += v;
        }
        self.focus_affichage = true;
    }

    /* ------------------------ Modes ------------------------ */

    pub fn basculer_mode_angle(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
        self.focus_affichage = true;
    }

    pub fn basculer_historique(&mut self) {
        self.montrer_historique = !self.montrer_historique;
    }

    /* ------------------------ Évaluation (= / Enter) ------------------------ */

    /// Évalue l'affichage via le noyau. Succès : résultat affiché + entrée
    /// (texte ORIGINAL, résultat) ajoutée à l'historique. Échec : sentinelle
    /// "Error" + message ; mémoire et historique intacts.
    pub fn calculer(&mut self) {
        let original = self.affichage.clone();

        match evaluer(&original, self.mode_angle, self.auto_parentheses) {
            Ok(v) => {
                self.affichage = formater_resultat(v);
                self.dernier_resultat = v;
                self.erreur.clear();
                self.historique.ajouter(original, v);
            }
            Err(e) => {
                log::warn!("évaluation échouée pour {original:?}: {e}");
                self.affichage = AFFICHAGE_ERREUR.to_string();
                self.erreur = e.to_string();
            }
        }
        self.focus_affichage = true;
    }
}
