// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface le dernier caractère
//   (quand le champ est focus)
// - Pavé 7×6 fidèle à la disposition classique : mémoire/effacement en haut,
//   chiffres à gauche, trig à droite, "=" accentué en bas
// - Fenêtre historique séparée (10 dernières entrées, plus récent en bas)
//
// Note :
// - Le curseur est posé entre les parenthèses après l'insertion d'une
//   fonction en mode auto (curseur_demande), via l'état du TextEdit.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::formater_ligne_historique;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice ingénieur");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(4.0);
                self.ui_mode(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                self.ui_controles(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });

        self.ui_historique(ui.ctx());
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Monospace)
                .horizontal_align(egui::Align::RIGHT)
                .id_source("affichage_edit"),
        );

        // Un champ vidé au clavier redevient "0"
        if resp.changed() {
            self.normaliser_affichage();
        }

        // Curseur demandé (insertion de fonction en mode auto : entre les parenthèses)
        if let Some(pos) = self.curseur_demande.take() {
            if let Some(mut etat_edit) = egui::TextEdit::load_state(ui.ctx(), resp.id) {
                let curseur = egui::text::CCursor::new(pos);
                etat_edit
                    .cursor
                    .set_char_range(Some(egui::text::CCursorRange::one(curseur)));
                etat_edit.store(ui.ctx(), resp.id);
            }
        }

        // Si on a cliqué un bouton, on redonne le focus au champ
        if self.focus_affichage {
            resp.request_focus();
            self.focus_affichage = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer();
        }
    }

    fn ui_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode angles :");
            ui.strong(self.mode_angle.etiquette());

            ui.separator();

            ui.checkbox(&mut self.auto_parentheses, "Auto parenthèses")
                .on_hover_text("Insère nom() et complète les '(' manquantes au calcul");
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(6)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                // Rangée 0 : mémoire + effacement
                self.bouton_action(ui, "MC", "Vide la mémoire", Action::MemoireEffacer);
                self.bouton_action(ui, "MR", "Rappelle la mémoire", Action::MemoireRappeler);
                self.bouton_action(ui, "M+", "Ajoute l'affichage à la mémoire", Action::MemoireAjouter);
                self.bouton_action(ui, "MS", "Enregistre l'affichage", Action::MemoireEnregistrer);
                self.bouton_action(ui, "CE", "Efface le dernier caractère", Action::EffacerDernier);
                self.bouton_action(ui, "C", "Efface tout l'affichage", Action::EffacerTout);
                ui.end_row();

                // Rangée 1
                self.bouton_saisie(ui, "7", "7");
                self.bouton_saisie(ui, "8", "8");
                self.bouton_saisie(ui, "9", "9");
                self.bouton_saisie(ui, "÷", "/");
                self.bouton_fonction(ui, "sin");
                self.bouton_fonction(ui, "cos");
                ui.end_row();

                // Rangée 2
                self.bouton_saisie(ui, "4", "4");
                self.bouton_saisie(ui, "5", "5");
                self.bouton_saisie(ui, "6", "6");
                self.bouton_saisie(ui, "×", "*");
                self.bouton_fonction(ui, "tan");
                self.bouton_fonction(ui, "cot");
                ui.end_row();

                // Rangée 3
                self.bouton_saisie(ui, "1", "1");
                self.bouton_saisie(ui, "2", "2");
                self.bouton_saisie(ui, "3", "3");
                self.bouton_saisie(ui, "-", "-");
                self.bouton_fonction(ui, "asin");
                self.bouton_fonction(ui, "acos");
                ui.end_row();

                // Rangée 4
                self.bouton_saisie(ui, "0", "0");
                self.bouton_saisie(ui, ".", ".");
                self.bouton_saisie(ui, "π", "π");
                self.bouton_saisie(ui, "+", "+");
                self.bouton_fonction(ui, "atan");
                self.bouton_fonction(ui, "acot");
                ui.end_row();

                // Rangée 5
                self.bouton_saisie(ui, "(", "(");
                self.bouton_saisie(ui, ")", ")");
                self.bouton_saisie(ui, "^", "^");
                self.bouton_fonction_libelle(ui, "√", "sqrt");
                self.bouton_fonction(ui, "ln");
                self.bouton_fonction(ui, "log");
                ui.end_row();

                // Rangée 6
                self.bouton_action(ui, "Deg/Rad", "Bascule degrés/radians", Action::BasculerMode);
                self.bouton_saisie(ui, "e", "e");
                self.bouton_action(ui, "±", "Change le signe", Action::Negatif);
                self.bouton_action(ui, "1/x", "Inverse", Action::Inverse);
                self.bouton_action(ui, "x²", "Carré", Action::Carre);
                self.bouton_egal(ui);
                ui.end_row();
            });
    }

    fn ui_controles(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Plein écran (F11)").clicked() {
                self.plein_ecran = !self.plein_ecran;
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.plein_ecran));
            }
            if ui.button("Historique").clicked() {
                self.basculer_historique();
            }
        });
    }

    fn ui_historique(&mut self, ctx: &egui::Context) {
        let mut ouverte = self.montrer_historique;
        egui::Window::new("Historique des calculs")
            .open(&mut ouverte)
            .default_width(320.0)
            .show(ctx, |ui| {
                if self.historique.est_vide() {
                    ui.label("Historique vide");
                    return;
                }
                // ordre chronologique, plus récent en bas
                for (i, calcul) in self.historique.iter().enumerate() {
                    ui.monospace(formater_ligne_historique(i + 1, calcul));
                }
            });
        self.montrer_historique = ouverte;
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_saisie(&mut self, ui: &mut egui::Ui, label: &str, a_inserer: &str) {
        let resp = ui.add_sized([52.0, 30.0], egui::Button::new(label));
        if resp.clicked() {
            self.saisir(a_inserer);
        }
    }

    fn bouton_fonction(&mut self, ui: &mut egui::Ui, nom: &str) {
        self.bouton_fonction_libelle(ui, nom, nom);
    }

    fn bouton_fonction_libelle(&mut self, ui: &mut egui::Ui, label: &str, nom: &str) {
        let resp = ui.add_sized([52.0, 30.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer_fonction(nom);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([52.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::MemoireEffacer => self.memoire_effacer(),
                Action::MemoireRappeler => self.memoire_rappeler(),
                Action::MemoireAjouter => self.memoire_ajouter(),
                Action::MemoireEnregistrer => self.memoire_enregistrer(),
                Action::EffacerDernier => self.effacer_dernier(),
                Action::EffacerTout => self.effacer_tout(),
                Action::BasculerMode => self.basculer_mode_angle(),
                Action::Negatif => self.negatif(),
                Action::Inverse => self.inverse(),
                Action::Carre => self.carre(),
            }
        }
    }

    /// "=" accentué (équivalent du bouton Accent de l'outil d'origine).
    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let accent = ui.visuals().selection.bg_fill;
        let resp = ui.add_sized([52.0, 30.0], egui::Button::new("=").fill(accent));
        if resp.clicked() {
            self.calculer();
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    MemoireEffacer,
    MemoireRappeler,
    MemoireAjouter,
    MemoireEnregistrer,
    EffacerDernier,
    EffacerTout,
    BasculerMode,
    Negatif,
    Inverse,
    Carre,
}
