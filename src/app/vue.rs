// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Afficheur en lecture seule : le clavier est lu globalement (pas de TextEdit),
//   donc pas de double saisie possible
// - Tactile : gros boutons (table PAVE)
// - Historique : 5 lignes max, plus récente en haut

use eframe::egui;

use super::etat::AppCalc;
use super::evenements::{action_pour_touche, Action, Bouton, Touche, PAVE};

/// Taille d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [56.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut sombre = self.theme.est_sombre();
                        if ui.checkbox(&mut sombre, "Sombre").changed() {
                            self.appliquer(Action::BasculerTheme);
                        }
                    });
                });
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(8.0);

                if let Some(action) = ui_pave(ui) {
                    self.appliquer(action);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    /// Clavier global : traduit les événements egui de la frame en Actions.
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(|ev| -> Vec<Touche> {
                    match ev {
                        egui::Event::Text(t) => t.chars().map(Touche::Caractere).collect(),
                        egui::Event::Key {
                            key, pressed: true, ..
                        } => match key {
                            egui::Key::Enter => vec![Touche::Entree],
                            egui::Key::Backspace => vec![Touche::Retour],
                            egui::Key::Escape => vec![Touche::Echap],
                            _ => Vec::new(),
                        },
                        _ => Vec::new(),
                    }
                })
                .collect()
        });

        for action in touches.into_iter().filter_map(action_pour_touche) {
            self.appliquer(action);
        }
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui) {
        let texte = egui::RichText::new(self.affichage()).monospace().size(30.0);
        let texte = if self.erreur {
            texte.color(ui.visuals().error_fg_color)
        } else {
            texte
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id("afficheur", |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(texte);
                    });
                });
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Historique ({}) :", self.historique.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("AC")
                    .on_hover_text("Remise à zéro : entrée + historique")
                    .clicked()
                {
                    self.appliquer(Action::Reinitialiser);
                }
                if ui.button("Vider").on_hover_text("Efface l’historique").clicked() {
                    self.appliquer(Action::ViderHistorique);
                }
            });
        });

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                if self.historique.is_empty() {
                    ui.weak("aucun calcul");
                }
                for ligne in self.historique.lignes() {
                    ui.monospace(ligne);
                }
            });
    }
}

/// Dessine le pavé ; retourne l’action du bouton cliqué (au plus un par frame).
fn ui_pave(ui: &mut egui::Ui) -> Option<Action> {
    let mut clic = None;

    egui::Grid::new("pave_calculatrice")
        .num_columns(4)
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            for ligne in PAVE {
                for bouton in ligne.iter() {
                    if bouton_clique(ui, bouton) {
                        clic = Some(bouton.action);
                    }
                }
                ui.end_row();
            }
        });

    clic
}

fn bouton_clique(ui: &mut egui::Ui, bouton: &Bouton) -> bool {
    let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(bouton.libelle));
    let resp = if bouton.aide.is_empty() {
        resp
    } else {
        resp.on_hover_text(bouton.aide)
    };
    resp.clicked()
}
