//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le record de simulation + les champs de saisie (unité, texte d’angle, curseur)
//! et traduire chaque geste en action du réducteur.
//!
//! Contrats :
//! - Aucun calcul physique ici (tout passe par le noyau).
//! - Paramètres invalides : refus, l’état précédent reste en place, message affiché.
//! - Un seul écrivain : `dispatch` remplace le record par celui rendu par le réducteur.

use std::f64::consts::PI;

use crate::config::ConfigSimulation;
use crate::noyau::{Action, ErreurPendule, EtatSimulation, ParametresPendule, UniteAngle};

#[derive(Clone, Debug)]
pub struct AppPendule {
    // --- simulation ---
    pub simulation: EtatSimulation,
    pub config: ConfigSimulation,

    // --- saisie d’angle ---
    pub unite: UniteAngle,
    pub saisie_angle: String, // texte du champ (degrés ou fraction de π, sans le symbole)
    pub curseur_angle: f64,   // valeur du curseur dans l’unité courante

    // --- messages ---
    pub erreur: String,
}

impl Default for AppPendule {
    fn default() -> Self {
        Self::new(ConfigSimulation::default())
    }
}

impl AppPendule {
    pub fn new(config: ConfigSimulation) -> Self {
        let parametres = config.parametres_initiaux().unwrap_or_else(|e| {
            tracing::warn!(erreur = %e, "paramètres initiaux refusés, valeurs par défaut");
            ParametresPendule::default()
        });
        let unite = config.initial.unite_angle;
        let simulation =
            EtatSimulation::new(parametres, config.pas_de_temps, config.capacite_fenetre);

        let angle = parametres.angle_initial();
        Self {
            simulation,
            unite,
            saisie_angle: unite.texte_pour(angle),
            curseur_angle: valeur_curseur(unite, angle),
            erreur: String::new(),
            config,
        }
    }

    /* ------------------------ Réducteur ------------------------ */

    pub fn dispatch(&mut self, action: Action) {
        let etat = std::mem::replace(&mut self.simulation, EtatSimulation::provisoire());
        self.simulation = etat.reduire(action);
    }

    /// Un pas de temps (appelé une fois par frame par la boucle eframe).
    pub fn tick(&mut self) {
        self.dispatch(Action::Tick);
    }

    pub fn basculer_marche(&mut self) {
        self.dispatch(Action::BasculerMarche);
    }

    pub fn reinitialiser(&mut self) {
        self.dispatch(Action::Reinitialiser);
    }

    pub fn set_periode_unique(&mut self, actif: bool) {
        self.dispatch(Action::PeriodeUnique(actif));
    }

    /// Utilitaire : nouveau run si les paramètres sont valides, sinon message + état conservé.
    fn appliquer(&mut self, res: Result<ParametresPendule, ErreurPendule>) {
        match res {
            Ok(p) => {
                self.erreur.clear();
                self.dispatch(Action::ChangerParametres(p));
            }
            Err(e) => self.set_erreur(e),
        }
    }

    pub fn set_erreur(&mut self, e: ErreurPendule) {
        tracing::warn!(erreur = %e, "changement refusé");
        self.erreur = e.to_string();
    }

    fn parametres(&self) -> ParametresPendule {
        *self.simulation.parametres()
    }

    /* ------------------------ Curseurs physiques ------------------------ */

    pub fn changer_longueur(&mut self, longueur_cm: f64) {
        let res = self.parametres().avec_longueur(longueur_cm);
        self.appliquer(res);
    }

    pub fn changer_gravite(&mut self, gravite: f64) {
        let res = self.parametres().avec_gravite(gravite);
        self.appliquer(res);
    }

    pub fn changer_amortissement(&mut self, actif: bool, coefficient: f64) {
        let res = self.parametres().avec_amortissement(actif, coefficient);
        self.appliquer(res);
    }

    /* ------------------------ Angle initial ------------------------ */

    /// Bouton “Appliquer” : lit le champ selon l’unité courante.
    pub fn appliquer_saisie_angle(&mut self) {
        match self.unite.vers_radians(&self.saisie_angle) {
            Ok(angle) => {
                self.curseur_angle = valeur_curseur(self.unite, angle);
                let res = self.parametres().avec_angle_initial(angle);
                self.appliquer(res);
            }
            Err(e) => self.set_erreur(e),
        }
    }

    /// Curseur d’angle : degrés, ou multiple de π ; le champ texte suit.
    pub fn changer_curseur_angle(&mut self, valeur: f64) {
        self.curseur_angle = valeur;
        let angle = match self.unite {
            UniteAngle::Degres => valeur.to_radians(),
            UniteAngle::FractionPi => valeur * PI,
        };
        self.saisie_angle = self.unite.texte_pour(angle);
        let res = self.parametres().avec_angle_initial(angle);
        self.appliquer(res);
    }

    /// Change l’unité de saisie : le champ et le curseur sont convertis, le run continue.
    pub fn changer_unite(&mut self, unite: UniteAngle) {
        if unite == self.unite {
            return;
        }
        let angle = self.parametres().angle_initial();
        self.unite = unite;
        self.saisie_angle = unite.texte_pour(angle);
        self.curseur_angle = valeur_curseur(unite, angle);
    }
}

/// Valeur du curseur pour un angle (radians) dans une unité.
fn valeur_curseur(unite: UniteAngle, angle: f64) -> f64 {
    match unite {
        UniteAngle::Degres => angle.to_degrees(),
        UniteAngle::FractionPi => angle / PI,
    }
}
