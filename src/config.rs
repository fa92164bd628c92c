// src/config.rs
//
// Configuration de la simulation
// ------------------------------
// - Valeurs par défaut = comportement du simulateur (pas 0.05 s, 100 points, 100 cm, 9.8 m/s², 30°)
// - Fichier TOML optionnel (natif seulement) : chemin dans PENDULE_CONFIG
// - Tous les champs sont optionnels dans le fichier

use std::ops::RangeInclusive;

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::fraction_pi::UniteAngle;
use crate::noyau::simulation::{CAPACITE_FENETRE_DEFAUT, PAS_DE_TEMPS_DEFAUT};
use crate::noyau::{ErreurPendule, ParametresPendule};

/// Variable d’environnement : chemin du fichier de configuration.
pub const VAR_CONFIG: &str = "PENDULE_CONFIG";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture du fichier de configuration : {0}")]
    Lecture(#[from] std::io::Error),

    #[error("configuration TOML invalide : {0}")]
    Toml(#[from] toml::de::Error),

    #[error("valeur invalide : {0}")]
    Valeur(String),

    #[error("paramètres initiaux : {0}")]
    Parametres(#[from] ErreurPendule),
}

/* ------------------------ Sections ------------------------ */

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigInitiale {
    pub longueur_cm: f64,
    pub gravite: f64,
    pub angle_degres: f64,
    pub amortissement_actif: bool,
    pub coefficient_amortissement: f64,
    pub unite_angle: UniteAngle,
}

impl Default for ConfigInitiale {
    fn default() -> Self {
        Self {
            longueur_cm: 100.0,
            gravite: 9.8,
            angle_degres: 30.0,
            amortissement_actif: true,
            coefficient_amortissement: 0.1,
            unite_angle: UniteAngle::Degres,
        }
    }
}

/// Bornes des curseurs (min, max, pas).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Borne {
    pub min: f64,
    pub max: f64,
    pub pas: f64,
}

impl Borne {
    const fn new(min: f64, max: f64, pas: f64) -> Self {
        Self { min, max, pas }
    }

    pub fn plage(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    fn valide(&self, nom: &str) -> Result<(), ErreurConfig> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.pas.is_finite()
            && self.min < self.max
            && self.pas > 0.0;
        if ok {
            Ok(())
        } else {
            Err(ErreurConfig::Valeur(format!("bornes de {nom} : {self:?}")))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigBornes {
    pub longueur_cm: Borne,
    pub gravite: Borne,
    pub coefficient_amortissement: Borne,
    pub angle_degres: Borne,
    pub angle_fraction_pi: Borne,
}

impl Default for ConfigBornes {
    fn default() -> Self {
        Self {
            longueur_cm: Borne::new(50.0, 200.0, 1.0),
            gravite: Borne::new(1.0, 20.0, 0.1),
            coefficient_amortissement: Borne::new(0.0, 0.5, 0.01),
            angle_degres: Borne::new(5.0, 85.0, 5.0),
            angle_fraction_pi: Borne::new(0.1, 0.75, 0.05),
        }
    }
}

/* ------------------------ Racine ------------------------ */

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigSimulation {
    /// Pas de temps simulé par frame (s).
    pub pas_de_temps: f64,
    /// Points conservés pour les graphiques.
    pub capacite_fenetre: usize,
    pub initial: ConfigInitiale,
    pub bornes: ConfigBornes,
}

impl Default for ConfigSimulation {
    fn default() -> Self {
        Self {
            pas_de_temps: PAS_DE_TEMPS_DEFAUT,
            capacite_fenetre: CAPACITE_FENETRE_DEFAUT,
            initial: ConfigInitiale::default(),
            bornes: ConfigBornes::default(),
        }
    }
}

impl ConfigSimulation {
    /// Parse + valide.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        let cfg: Self = toml::from_str(texte)?;
        cfg.valider()?;
        Ok(cfg)
    }

    pub fn valider(&self) -> Result<(), ErreurConfig> {
        if !self.pas_de_temps.is_finite() || self.pas_de_temps <= 0.0 {
            return Err(ErreurConfig::Valeur(format!(
                "pas_de_temps = {}",
                self.pas_de_temps
            )));
        }
        if self.capacite_fenetre == 0 {
            return Err(ErreurConfig::Valeur("capacite_fenetre = 0".into()));
        }

        self.bornes.longueur_cm.valide("longueur_cm")?;
        self.bornes.gravite.valide("gravite")?;
        self.bornes
            .coefficient_amortissement
            .valide("coefficient_amortissement")?;
        self.bornes.angle_degres.valide("angle_degres")?;
        self.bornes.angle_fraction_pi.valide("angle_fraction_pi")?;

        self.parametres_initiaux()?;
        Ok(())
    }

    /// Paramètres physiques du premier run.
    pub fn parametres_initiaux(&self) -> Result<ParametresPendule, ErreurPendule> {
        let i = &self.initial;
        ParametresPendule::new(
            i.longueur_cm,
            i.gravite,
            i.angle_degres.to_radians(),
            i.amortissement_actif,
            i.coefficient_amortissement,
        )
    }

    /// Lit le fichier désigné par PENDULE_CONFIG (absent => défauts).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger_env() -> Result<Self, ErreurConfig> {
        match std::env::var_os(VAR_CONFIG) {
            None => Ok(Self::default()),
            Some(chemin) => {
                tracing::info!(chemin = ?chemin, "chargement de la configuration");
                let texte = std::fs::read_to_string(&chemin)?;
                Self::depuis_toml(&texte)
            }
        }
    }
}
