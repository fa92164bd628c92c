// src/noyau/cinematique.rs
//
// Cinématique analytique du pendule simple (petits angles)
// --------------------------------------------------------
// - Non amorti : θ(t) = θ₀ cos(ω₀t)
// - Amorti     : θ(t) = θ₀ e^(−βt) cos(ω₀t)
// - ω(t), α(t) = dérivées exactes de θ(t) (pas d’intégration numérique)

use super::parametres::ParametresPendule;

/// Instantané cinématique à l’instant `temps`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EtatCinematique {
    pub temps: f64,
    pub angle: f64,                  // rad
    pub vitesse_angulaire: f64,      // rad/s
    pub acceleration_angulaire: f64, // rad/s²
}

/// Grandeurs linéaires le long de l’arc (v = ω·r, a = α·r, s = θ·r).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrandeursTangentielles {
    pub position_arc: f64, // m
    pub vitesse: f64,      // m/s
    pub acceleration: f64, // m/s²
}

impl EtatCinematique {
    pub fn tangentielles(&self, longueur_m: f64) -> GrandeursTangentielles {
        GrandeursTangentielles {
            position_arc: self.angle * longueur_m,
            vitesse: self.vitesse_angulaire * longueur_m,
            acceleration: self.acceleration_angulaire * longueur_m,
        }
    }
}

/// Évalue θ, ω, α à l’instant t (t ≥ 0).
pub fn evaluer(p: &ParametresPendule, t: f64) -> EtatCinematique {
    let theta0 = p.angle_initial();
    let w0 = p.pulsation();
    let (sin, cos) = (w0 * t).sin_cos();

    let (angle, vitesse_angulaire, acceleration_angulaire) = match p.beta() {
        None => (
            theta0 * cos,
            -theta0 * w0 * sin,
            -theta0 * w0 * w0 * cos,
        ),
        Some(beta) => {
            let enveloppe = theta0 * (-beta * t).exp();
            (
                enveloppe * cos,
                -enveloppe * (beta * cos + w0 * sin),
                enveloppe * ((beta * beta - w0 * w0) * cos + 2.0 * beta * w0 * sin),
            )
        }
    };

    EtatCinematique {
        temps: t,
        angle,
        vitesse_angulaire,
        acceleration_angulaire,
    }
}

impl ParametresPendule {
    pub fn evaluer(&self, t: f64) -> EtatCinematique {
        evaluer(self, t)
    }
}
