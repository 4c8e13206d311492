// src/app.rs
//
// Calculatrice ingénieur — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter est géré dans vue.rs (au bon endroit: quand le champ a le focus).
// - Ici: seulement les raccourcis globaux de fenêtre, F11 = plein écran,
//   Escape = sortie du plein écran (les raccourcis de l'outil d'origine).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let f11 = ctx.input(|i| i.key_pressed(egui::Key::F11));
        if f11 {
            self.plein_ecran = !self.plein_ecran;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.plein_ecran));
        }

        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc && self.plein_ecran {
            self.plein_ecran = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
