// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : valeur ("0" si vide) + aperçu brut
// - Tactile : gros boutons, un clic = une entrée
// - Réglages : arrondi + durée de "Error" (DragValue)
//
// Note :
// - La vue ne touche jamais au texte : elle lit `Editeur::affichage()`
//   et renvoie des `Entree`.

use std::time::Duration;

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::glyphes::{est_operateur, DIV, MOINS, MULT, PLUS};
use crate::noyau::reglages::{CHIFFRES_MAX, DELAI_ERREUR_MAX};
use crate::noyau::Entree;

/// Pavé : 5 rangées de 4 touches.
const PAVE: [[(&str, Entree); 4]; 5] = [
    [
        ("C", Entree::Effacer),
        ("DEL", Entree::Retour),
        ("(", Entree::Jeton('(')),
        (")", Entree::Jeton(')')),
    ],
    [
        ("7", Entree::Jeton('7')),
        ("8", Entree::Jeton('8')),
        ("9", Entree::Jeton('9')),
        ("÷", Entree::Jeton(DIV)),
    ],
    [
        ("4", Entree::Jeton('4')),
        ("5", Entree::Jeton('5')),
        ("6", Entree::Jeton('6')),
        ("×", Entree::Jeton(MULT)),
    ],
    [
        ("1", Entree::Jeton('1')),
        ("2", Entree::Jeton('2')),
        ("3", Entree::Jeton('3')),
        ("−", Entree::Jeton(MOINS)),
    ],
    [
        ("0", Entree::Jeton('0')),
        (".", Entree::Jeton('.')),
        ("=", Entree::Evaluer),
        ("+", Entree::Jeton(PLUS)),
    ],
];

const TAILLE_BOUTON: [f32; 2] = [72.0, 56.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.heading("Calculatrice");
            ui.add_space(6.0);

            self.ui_ecran(ui);

            ui.add_space(10.0);

            if let Some(e) = Self::ui_pave(ui) {
                self.entree(e, maintenant);
            }

            ui.add_space(10.0);
            self.ui_reglages(ui);
        });
    }

    /// Précision d’arrondi + durée de "Error" (bornes : `Reglages`).
    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        let r = self.editeur.reglages();

        ui.horizontal(|ui| {
            ui.label("Arrondi :");
            let mut d = r.chiffres;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=CHIFFRES_MAX)
                    .suffix(" déc."),
            );
            if resp.changed() {
                self.set_chiffres(d);
            }

            ui.separator();

            ui.label("Error :");
            let mut ms = r.delai_erreur.as_millis() as u64;
            let resp = ui.add(
                egui::DragValue::new(&mut ms)
                    .speed(10)
                    .range(0..=DELAI_ERREUR_MAX.as_millis() as u64)
                    .suffix(" ms"),
            );
            if resp.changed() {
                self.set_delai_erreur(Duration::from_millis(ms));
            }
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let aff = self.editeur.affichage();
        let couleur = if self.editeur.erreur_affichee() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(4.0 * TAILLE_BOUTON[0] + 3.0 * 6.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&aff.valeur)
                            .monospace()
                            .size(32.0)
                            .color(couleur),
                    );
                });

                // aperçu : texte brut, vide compris (ligne réservée même vide)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&aff.apercu).monospace().weak());
                });
            });
    }

    /// Dessine le pavé et retourne l’entrée cliquée (au plus une par image).
    fn ui_pave(ui: &mut egui::Ui) -> Option<Entree> {
        let mut clic = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (label, entree) in rangee {
                        if Self::bouton(ui, label, entree) {
                            clic = Some(entree);
                        }
                    }
                    ui.end_row();
                }
            });

        clic
    }

    fn bouton(ui: &mut egui::Ui, label: &str, entree: Entree) -> bool {
        let texte = egui::RichText::new(label).size(22.0);
        let mut b = egui::Button::new(texte);

        match entree {
            Entree::Evaluer => b = b.fill(ui.visuals().selection.bg_fill),
            Entree::Jeton(c) if est_operateur(c) => b = b.fill(ui.visuals().faint_bg_color),
            _ => {}
        }

        ui.add_sized(TAILLE_BOUTON, b).clicked()
    }
}
