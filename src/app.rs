// src/app.rs
//
// Simulateur de pendule — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppPendule (pour main.rs: use crate::app::AppPendule;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Boucle : eframe appelle update() à chaque frame ; on avance d’UN pas fixe
// tant que la simulation tourne, puis on redemande une frame. En pause, plus de
// tick ni de repaint forcé : c’est le pilote qui suspend.

pub mod etat;
pub mod vue;

pub use etat::AppPendule;

use eframe::egui;

impl eframe::App for AppPendule {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = Réinitialiser (comme le bouton).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.reinitialiser();
        }

        if self.simulation.en_marche() {
            self.tick();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
