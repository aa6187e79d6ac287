// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran en lecture seule, aligné à droite
// - Pavé principal 5x4 + pavé scientifique 2x4
// - Clavier : Enter évalue, Backspace efface, chiffres/opérateurs tapés directement

use eframe::egui;

use super::etat::AppCalc;

/// Pavé principal (5 lignes x 4 colonnes).
const PAVE_PRINCIPAL: [[&str; 4]; 5] = [
    ["C", "(", ")", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "^", "="],
];

/// Pavé scientifique (2 lignes x 4 colonnes).
const PAVE_FONCTIONS: [[&str; 4]; 2] = [["sqrt", "log", "ln", "DEL"], ["sin", "cos", "tan", "%"]];

/// Caractères acceptés depuis le clavier physique.
const CARACTERES_CLAVIER: &str = "0123456789.+-*/^()%";

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(10.0);
                self.ui_pave(ui, "pave_principal", &PAVE_PRINCIPAL, [70.0, 50.0]);

                ui.add_space(10.0);
                self.ui_pave(ui, "pave_fonctions", &PAVE_FONCTIONS, [70.0, 40.0]);

                ui.add_space(10.0);
                ui.separator();
                self.ui_demarche(ui);
            });
    }

    /// Raccourcis clavier (Enter, Backspace, saisie directe).
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let (enter, backspace, textes) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                textes,
            )
        });

        for c in textes.iter().flat_map(|t| t.chars()) {
            if CARACTERES_CLAVIER.contains(c) {
                self.appuyer(c.encode_utf8(&mut [0u8; 4]));
            }
        }
        if backspace {
            self.backspace();
        }
        if enter {
            self.evaluer();
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(50.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(24.0)
                            .strong(),
                    );
                });
            });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave<const L: usize>(
        &mut self,
        ui: &mut egui::Ui,
        id: &str,
        pave: &[[&str; 4]; L],
        taille: [f32; 2],
    ) {
        egui::Grid::new(id)
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for ligne in pave {
                    for label in ligne {
                        if ui.add_sized(taille, egui::Button::new(*label)).clicked() {
                            self.touche(label);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Résultat", "demarche_resultat", &self.demarche.resultat);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));

        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
