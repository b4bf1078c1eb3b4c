// src/app.rs
//
// Calculatrice à glyphes — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre par image :
// 1) horloge egui -> remise à vide "Error" si due
// 2) clavier (une entrée par événement, traitée jusqu’au bout)
// 3) vue (boutons)
// 4) si une remise à vide est en attente, on redemande une image à l’échéance
//
// Les touches gérées ici (Enter, Backspace, Escape, Delete) sont RETIRÉES
// des événements avant la vue : sinon egui rejoue Enter en clic sur le bouton
// qui a le focus (Tab), et une seule touche produirait deux entrées.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.image(ctx);
    }
}

impl AppCalc {
    /// Une image complète (sans `eframe::Frame`, donc pilotable en test).
    pub fn image(&mut self, ctx: &egui::Context) {
        let maintenant = ctx.input(|i| i.time);

        self.editeur.tick(maintenant);

        for nom in touches_de_l_image(ctx) {
            self.touche(&nom, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        if let Some(delai) = self.editeur.prochaine_echeance(maintenant) {
            ctx.request_repaint_after(delai);
        }
    }
}

fn nom_de_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("Enter"),
        egui::Key::Backspace => Some("Backspace"),
        egui::Key::Escape => Some("Escape"),
        egui::Key::Delete => Some("Delete"),
        _ => None,
    }
}

/// Événements clavier de l’image, en noms de touches pour `noyau::depuis_touche`.
/// Le texte tapé arrive caractère par caractère (collage compris).
/// Les touches nommées sont consommées.
fn touches_de_l_image(ctx: &egui::Context) -> Vec<String> {
    ctx.input_mut(|i| {
        let mut out = Vec::new();
        i.events.retain(|ev| match ev {
            egui::Event::Text(t) => {
                out.extend(t.chars().map(String::from));
                true
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match nom_de_touche(*key) {
                Some(nom) => {
                    out.push(nom.to_string());
                    false
                }
                None => true,
            },
            _ => true,
        });
        out
    })
}
