//! Noyau pendule (sans UI)
//!
//! Organisation interne :
//! - parametres.rs  : paramètres physiques validés + ω₀ + période
//! - cinematique.rs : θ, ω, α analytiques (amorti / non amorti)
//! - fraction_pi.rs : affichage “joli” en fraction de π + saisie inverse
//! - simulation.rs  : record d’état + réducteur + fenêtre d’échantillons
//! - erreur.rs      : erreurs typées

pub mod cinematique;
pub mod erreur;
pub mod fraction_pi;
pub mod parametres;
pub mod simulation;


#[cfg(test)]
mod tests_fraction_pi;

#[cfg(test)]
mod tests_simulation;

// API publique minimale (ce que l’app consomme ; le reste par chemin de module)
pub use erreur::ErreurPendule;
pub use fraction_pi::{format_fraction_pi, UniteAngle};
pub use parametres::ParametresPendule;
pub use simulation::{Action, EtatSimulation};
