//! src/noyau/parametres.rs
//!
//! Paramètres physiques d’un run (immutables).
//!
//! Contrats :
//! - Construction seulement via `ParametresPendule::new` (validation).
//! - Longueur stockée en cm (comme le curseur), convertie en m pour la physique.
//! - Un paramètre modifié = un nouveau run (voir simulation.rs).

use std::f64::consts::PI;

use super::erreur::ErreurPendule;

/// cm -> m
const CM_PAR_M: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParametresPendule {
    longueur_cm: f64,
    gravite: f64,
    angle_initial: f64, // radians
    amortissement_actif: bool,
    coefficient_amortissement: f64,
}

/// Run de démonstration : 1 m, 9.8 m/s², 30°, amortissement 0.1.
impl Default for ParametresPendule {
    fn default() -> Self {
        Self {
            longueur_cm: 100.0,
            gravite: 9.8,
            angle_initial: PI / 6.0,
            amortissement_actif: true,
            coefficient_amortissement: 0.1,
        }
    }
}

impl ParametresPendule {
    /// Valide et construit un jeu de paramètres.
    ///
    /// Refus :
    /// - longueur ou gravité ≤ 0
    /// - coefficient d’amortissement < 0
    /// - toute valeur non finie (NaN, ±∞)
    pub fn new(
        longueur_cm: f64,
        gravite: f64,
        angle_initial: f64,
        amortissement_actif: bool,
        coefficient_amortissement: f64,
    ) -> Result<Self, ErreurPendule> {
        if !longueur_cm.is_finite() || longueur_cm <= 0.0 {
            return Err(ErreurPendule::parametre("longueur", longueur_cm));
        }
        if !gravite.is_finite() || gravite <= 0.0 {
            return Err(ErreurPendule::parametre("gravité", gravite));
        }
        if !angle_initial.is_finite() {
            return Err(ErreurPendule::parametre("angle initial", angle_initial));
        }
        if !coefficient_amortissement.is_finite() || coefficient_amortissement < 0.0 {
            return Err(ErreurPendule::parametre(
                "coefficient d’amortissement",
                coefficient_amortissement,
            ));
        }

        Ok(Self {
            longueur_cm,
            gravite,
            angle_initial,
            amortissement_actif,
            coefficient_amortissement,
        })
    }

    pub fn longueur_cm(&self) -> f64 {
        self.longueur_cm
    }

    pub fn longueur_m(&self) -> f64 {
        self.longueur_cm / CM_PAR_M
    }

    pub fn gravite(&self) -> f64 {
        self.gravite
    }

    pub fn angle_initial(&self) -> f64 {
        self.angle_initial
    }

    pub fn amortissement_actif(&self) -> bool {
        self.amortissement_actif
    }

    /// Coefficient tel que saisi (conservé même si l’amortissement est coupé).
    pub fn coefficient_amortissement(&self) -> f64 {
        self.coefficient_amortissement
    }

    /// β effectif : None si l’amortissement est désactivé (branche non amortie).
    pub fn beta(&self) -> Option<f64> {
        self.amortissement_actif
            .then_some(self.coefficient_amortissement)
    }

    /// ω₀ = √(g / L)
    pub fn pulsation(&self) -> f64 {
        (self.gravite / self.longueur_m()).sqrt()
    }

    /// Période de référence (non amortie) : T = 2π √(L / g)
    pub fn periode(&self) -> f64 {
        2.0 * PI * (self.longueur_m() / self.gravite).sqrt()
    }

    /* ------------------------ Variantes (un champ change => nouveau jeu validé) ------------------------ */

    pub fn avec_longueur(self, longueur_cm: f64) -> Result<Self, ErreurPendule> {
        Self::new(
            longueur_cm,
            self.gravite,
            self.angle_initial,
            self.amortissement_actif,
            self.coefficient_amortissement,
        )
    }

    pub fn avec_gravite(self, gravite: f64) -> Result<Self, ErreurPendule> {
        Self::new(
            self.longueur_cm,
            gravite,
            self.angle_initial,
            self.amortissement_actif,
            self.coefficient_amortissement,
        )
    }

    pub fn avec_angle_initial(self, angle: f64) -> Result<Self, ErreurPendule> {
        Self::new(
            self.longueur_cm,
            self.gravite,
            angle,
            self.amortissement_actif,
            self.coefficient_amortissement,
        )
    }

    pub fn avec_amortissement(self, actif: bool, coefficient: f64) -> Result<Self, ErreurPendule> {
        Self::new(
            self.longueur_cm,
            self.gravite,
            self.angle_initial,
            actif,
            coefficient,
        )
    }
}
