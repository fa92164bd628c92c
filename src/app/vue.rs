// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Pendule dessiné au Painter (pivot, fil, masse, trajectoire, arc d’angle)
// - Panneau de contrôle (curseurs, saisie d’angle, unité, options, boutons)
// - Statistiques + 3 graphiques (egui_plot) alimentés par la fenêtre d’échantillons

use std::f32::consts::PI as PI32;

use eframe::egui;
use egui_plot::{Line, Plot};

use super::etat::AppPendule;
use crate::config::Borne;
use crate::noyau::format_fraction_pi;
use crate::noyau::simulation::Echantillon;
use crate::noyau::UniteAngle;

/// Zone de dessin du pendule (px).
const TAILLE_DESSIN: f32 = 300.0;
/// Décalage vertical du pivot dans la zone.
const PIVOT_Y: f32 = 50.0;
const RAYON_MASSE: f32 = 15.0;
const RAYON_ARC: f32 = 20.0;
const HAUTEUR_GRAPHE: f32 = 150.0;

impl AppPendule {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Simulateur de pendule");
                ui.add_space(6.0);

                ui.horizontal_top(|ui| {
                    self.ui_dessin(ui);
                    ui.vertical(|ui| {
                        self.ui_controles(ui);
                        ui.add_space(8.0);
                        self.ui_statistiques(ui);
                    });
                });

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_graphes(ui);
            });
    }

    /* ------------------------ Dessin ------------------------ */

    fn ui_dessin(&self, ui: &mut egui::Ui) {
        let (resp, painter) = ui.allocate_painter(
            egui::vec2(TAILLE_DESSIN, TAILLE_DESSIN),
            egui::Sense::hover(),
        );
        let rect = resp.rect;
        painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

        let params = self.simulation.parametres();
        let angle = self.simulation.courant().angle as f32;

        // 1 px / cm tant que la longueur max tient dans la zone
        let longueur_max = self.config.bornes.longueur_cm.max as f32;
        let echelle = ((TAILLE_DESSIN - PIVOT_Y - RAYON_MASSE - 5.0) / longueur_max).min(1.0);
        let rayon = params.longueur_cm() as f32 * echelle;

        let pivot = egui::pos2(rect.center().x, rect.top() + PIVOT_Y);
        let masse = pivot + rayon * egui::vec2(angle.sin(), angle.cos());

        let trait_fil = egui::Stroke::new(2.0, ui.visuals().text_color());
        let trait_bleu = egui::Stroke::new(2.0, egui::Color32::from_rgb(60, 110, 230));

        // Trajectoire circulaire (pointillés)
        let cercle: Vec<egui::Pos2> = (0..=72)
            .map(|k| {
                let a = k as f32 / 72.0 * 2.0 * PI32;
                pivot + rayon * egui::vec2(a.sin(), a.cos())
            })
            .collect();
        painter.extend(egui::Shape::dashed_line(
            &cercle,
            egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
            5.0,
            5.0,
        ));

        // Verticale de référence + arc 0 → θ
        painter.line_segment([pivot, pivot + egui::vec2(0.0, 40.0)], trait_bleu);
        let pas = 24;
        let arc: Vec<egui::Pos2> = (0..=pas)
            .map(|k| {
                let a = angle * k as f32 / pas as f32;
                pivot + RAYON_ARC * egui::vec2(a.sin(), a.cos())
            })
            .collect();
        painter.add(egui::Shape::line(arc, trait_bleu));

        // Fil, masse, pivot
        painter.line_segment([pivot, masse], trait_fil);
        painter.circle_filled(masse, RAYON_MASSE, egui::Color32::from_rgb(220, 40, 40));
        painter.circle_filled(pivot, 4.0, ui.visuals().text_color());

        // Angle courant : fraction ≈ degrés
        let theta = self.simulation.courant().angle;
        painter.text(
            pivot - egui::vec2(0.0, 20.0),
            egui::Align2::CENTER_BOTTOM,
            format!(
                "{} ≈ {:.1}°",
                format_fraction_pi(theta),
                theta.to_degrees()
            ),
            egui::FontId::proportional(14.0),
            trait_bleu.color,
        );
    }

    /* ------------------------ Contrôles ------------------------ */

    fn ui_controles(&mut self, ui: &mut egui::Ui) {
        let params = *self.simulation.parametres();
        let bornes = self.config.bornes.clone();

        let mut longueur = params.longueur_cm();
        if curseur(ui, &mut longueur, &bornes.longueur_cm, "Longueur", " cm", 0) {
            self.changer_longueur(longueur);
        }

        let mut gravite = params.gravite();
        if curseur(ui, &mut gravite, &bornes.gravite, "Gravité", " m/s²", 1) {
            self.changer_gravite(gravite);
        }

        ui.add_space(4.0);
        self.ui_angle(ui, &bornes.angle_degres, &bornes.angle_fraction_pi);
        ui.add_space(4.0);

        // Options
        let mut actif = params.amortissement_actif();
        if ui.checkbox(&mut actif, "Amortissement").changed() {
            self.changer_amortissement(actif, params.coefficient_amortissement());
        }

        let mut periode_unique = self.simulation.periode_unique();
        if ui.checkbox(&mut periode_unique, "Une seule période").changed() {
            self.set_periode_unique(periode_unique);
        }

        if actif {
            let mut coef = params.coefficient_amortissement();
            if curseur(
                ui,
                &mut coef,
                &bornes.coefficient_amortissement,
                "Coefficient",
                "",
                2,
            ) {
                self.changer_amortissement(true, coef);
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let libelle = if self.simulation.en_marche() {
                "Pause"
            } else {
                "Démarrer"
            };
            if ui.add_sized([80.0, 30.0], egui::Button::new(libelle)).clicked() {
                self.basculer_marche();
            }
            if ui
                .add_sized([80.0, 30.0], egui::Button::new("Réinitialiser"))
                .on_hover_text("t = 0, graphiques vidés (Échap)")
                .clicked()
            {
                self.reinitialiser();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_angle(&mut self, ui: &mut egui::Ui, degres: &Borne, fraction: &Borne) {
        ui.horizontal(|ui| {
            ui.label("Angle initial :");
            if self.unite == UniteAngle::FractionPi {
                ui.monospace("π ×");
            }

            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.saisie_angle)
                    .desired_width(70.0)
                    .hint_text(match self.unite {
                        UniteAngle::Degres => "30",
                        UniteAngle::FractionPi => "1/6",
                    })
                    .id_salt("saisie_angle"),
            );
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));

            let mut unite = self.unite;
            egui::ComboBox::from_id_salt("unite_angle")
                .selected_text(unite.libelle())
                .show_ui(ui, |ui| {
                    for u in [UniteAngle::Degres, UniteAngle::FractionPi] {
                        ui.selectable_value(&mut unite, u, u.libelle());
                    }
                });
            self.changer_unite(unite);

            let appliquer = ui.button("Appliquer").clicked();
            if appliquer || (resp.lost_focus() && enter) {
                self.appliquer_saisie_angle();
            }
        });

        let (borne, suffixe, decimales) = match self.unite {
            UniteAngle::Degres => (degres, "°", 0),
            UniteAngle::FractionPi => (fraction, " π", 2),
        };
        let mut v = self.curseur_angle;
        if curseur(ui, &mut v, borne, "", suffixe, decimales) {
            self.changer_curseur_angle(v);
        }
    }

    /* ------------------------ Statistiques ------------------------ */

    fn ui_statistiques(&self, ui: &mut egui::Ui) {
        let params = self.simulation.parametres();
        let etat = self.simulation.courant();
        let tg = etat.tangentielles(params.longueur_m());

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.strong("Statistiques");
                ui.monospace(format!("Temps        : {:.2} s", self.simulation.temps()));
                ui.monospace(format!("Période      : {:.2} s", params.periode()));
                ui.monospace(format!(
                    "Angle (θ)    : {:.2}° = {}",
                    etat.angle.to_degrees(),
                    format_fraction_pi(etat.angle)
                ));
                ui.monospace(format!("Position     : {:.2} m", tg.position_arc));
                ui.monospace(format!("Vitesse      : {:.2} m/s", tg.vitesse));
                ui.monospace(format!("Accélération : {:.2} m/s²", tg.acceleration));
                if self.simulation.periode_terminee() {
                    ui.weak("Période complète.");
                }
            });
    }

    /* ------------------------ Graphiques ------------------------ */

    fn ui_graphes(&self, ui: &mut egui::Ui) {
        let fenetre = self.simulation.fenetre();

        let graphes: [(&str, &str, fn(&Echantillon) -> f64, egui::Color32); 3] = [
            ("Position", "m", |e| e.position, egui::Color32::from_rgb(136, 132, 216)),
            ("Vitesse", "m/s", |e| e.vitesse, egui::Color32::from_rgb(130, 202, 157)),
            (
                "Accélération",
                "m/s²",
                |e| e.acceleration,
                egui::Color32::from_rgb(255, 128, 66),
            ),
        ];

        for (titre, unite, valeur, couleur) in graphes {
            ui.label(format!("{titre} vs. temps"));
            let survol = Plot::new(format!("graphe_{titre}"))
                .height(HAUTEUR_GRAPHE)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .x_axis_label("s")
                .y_axis_label(unite)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(titre, fenetre.serie(valeur)).color(couleur));
                    plot_ui
                        .pointer_coordinate()
                        .and_then(|p| fenetre.plus_proche(p.x))
                });
            if let Some(e) = survol.inner {
                survol.response.on_hover_text(format!(
                    "t = {:.2} s\n{titre} : {:.3} {unite}\nθ = {} ({:.3}π)",
                    e.temps,
                    valeur(e),
                    e.affichage,
                    e.angle_pi
                ));
            }
            ui.add_space(6.0);
        }
    }
}

/// Curseur avec libellé ; renvoie true si l’utilisateur a changé la valeur.
///
/// Seules les éditions sont bornées : une valeur déjà hors plage ou hors grille
/// (saisie manuelle, config) est affichée telle quelle, jamais réécrite.
fn curseur(
    ui: &mut egui::Ui,
    valeur: &mut f64,
    borne: &Borne,
    libelle: &str,
    suffixe: &str,
    decimales: usize,
) -> bool {
    ui.add(
        egui::Slider::new(valeur, borne.plage())
            .step_by(borne.pas)
            .clamping(egui::SliderClamping::Edits)
            .fixed_decimals(decimales)
            .suffix(suffixe)
            .text(libelle),
    )
    .changed()
}
