// src/app.rs
//
// Calculatrice: module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, evenements, historique, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre dans une frame : clavier -> thème -> dessin (les clics du pavé sont appliqués
// pendant le dessin). Tout est synchrone, une action à la fois.

pub mod etat;
pub mod evenements;
pub mod historique;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        ctx.set_visuals(if self.theme.est_sombre() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
