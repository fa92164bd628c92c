//! src/noyau/simulation.rs
//!
//! État de simulation (record immuable) + réducteur.
//!
//! Contrats :
//! - Un seul écrivain : le pilote (boucle de frames) applique `reduire` une fois par action.
//! - Pas de temps FIXE par tick (0.05 s par défaut), indépendant de l’horloge réelle.
//! - Changer les paramètres = nouveau run : t = 0, fenêtre vidée puis réamorcée à t = 0.
//! - Fenêtre bornée : jamais plus de `capacite` échantillons (les plus anciens sortent).

use std::collections::VecDeque;

use super::cinematique::EtatCinematique;
use super::fraction_pi::{format_fraction_pi, valeur_fraction_pi};
use super::parametres::ParametresPendule;

/// Pas de temps simulé par tick (s).
pub const PAS_DE_TEMPS_DEFAUT: f64 = 0.05;

/// Nombre de points conservés pour les graphiques.
pub const CAPACITE_FENETRE_DEFAUT: usize = 100;

/* ------------------------ Échantillons ------------------------ */

/// Point de graphique (unités SI le long de l’arc).
#[derive(Clone, Debug, PartialEq)]
pub struct Echantillon {
    pub temps: f64,
    pub position: f64,     // m (arc)
    pub angle_pi: f64,     // multiple de π (fraction reconnue, sinon angle / π)
    pub affichage: String, // "π/4", "0.37π"…
    pub vitesse: f64,      // m/s
    pub acceleration: f64, // m/s²
}

impl Echantillon {
    pub fn depuis(etat: &EtatCinematique, longueur_m: f64) -> Self {
        let tg = etat.tangentielles(longueur_m);
        Self {
            temps: etat.temps,
            position: tg.position_arc,
            angle_pi: valeur_fraction_pi(etat.angle),
            affichage: format_fraction_pi(etat.angle),
            vitesse: tg.vitesse,
            acceleration: tg.acceleration,
        }
    }
}

/// Fenêtre glissante de capacité fixe (au moins 1).
#[derive(Clone, Debug, PartialEq)]
pub struct FenetreEchantillons {
    points: VecDeque<Echantillon>,
    capacite: usize,
}

impl FenetreEchantillons {
    pub fn new(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            points: VecDeque::with_capacity(capacite),
            capacite,
        }
    }

    pub fn push(&mut self, e: Echantillon) {
        self.points.push_back(e);
        while self.points.len() > self.capacite {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn iter(&self) -> impl Iterator<Item = &Echantillon> + '_ {
        self.points.iter()
    }

    pub fn dernier(&self) -> Option<&Echantillon> {
        self.points.back()
    }

    /// Échantillon le plus proche d’un instant (survol des graphiques).
    pub fn plus_proche(&self, temps: f64) -> Option<&Echantillon> {
        self.points
            .iter()
            .min_by(|a, b| (a.temps - temps).abs().total_cmp(&(b.temps - temps).abs()))
    }

    /// Série (temps, valeur) pour une courbe.
    pub fn serie(&self, f: impl Fn(&Echantillon) -> f64) -> Vec<[f64; 2]> {
        self.points.iter().map(|e| [e.temps, f(e)]).collect()
    }
}

/* ------------------------ Actions ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Un pas de temps fixe (si en marche).
    Tick,
    /// Pause / reprise.
    BasculerMarche,
    /// t = 0, fenêtre vidée, période non terminée (l’état marche/pause est conservé).
    Reinitialiser,
    /// Nouveau run avec des paramètres déjà validés.
    ChangerParametres(ParametresPendule),
    /// Mode “une seule période” (réinitialise).
    PeriodeUnique(bool),
}

/* ------------------------ État ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub struct EtatSimulation {
    parametres: ParametresPendule,
    temps: f64,
    en_marche: bool,
    periode_unique: bool,
    periode_terminee: bool,
    pas_de_temps: f64,
    fenetre: FenetreEchantillons,
}

impl EtatSimulation {
    /// Run initial (t = 0, en marche), fenêtre amorcée avec l’échantillon t = 0.
    ///
    /// Un pas de temps non positif ou non fini est remplacé par la valeur par défaut.
    pub fn new(parametres: ParametresPendule, pas_de_temps: f64, capacite: usize) -> Self {
        let pas_de_temps = if pas_de_temps.is_finite() && pas_de_temps > 0.0 {
            pas_de_temps
        } else {
            PAS_DE_TEMPS_DEFAUT
        };

        Self {
            parametres,
            temps: 0.0,
            en_marche: true,
            periode_unique: false,
            periode_terminee: false,
            pas_de_temps,
            fenetre: FenetreEchantillons::new(capacite),
        }
        .reinitialiser()
    }

    /// Record vide (en pause, aucun échantillon) : occupe la place le temps
    /// d’un passage par le réducteur. N’alloue rien, ne journalise rien.
    pub(crate) fn provisoire() -> Self {
        Self {
            parametres: ParametresPendule::default(),
            temps: 0.0,
            en_marche: false,
            periode_unique: false,
            periode_terminee: false,
            pas_de_temps: PAS_DE_TEMPS_DEFAUT,
            fenetre: FenetreEchantillons {
                points: VecDeque::new(),
                capacite: 1,
            },
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn parametres(&self) -> &ParametresPendule {
        &self.parametres
    }

    pub fn temps(&self) -> f64 {
        self.temps
    }

    pub fn en_marche(&self) -> bool {
        self.en_marche
    }

    pub fn periode_unique(&self) -> bool {
        self.periode_unique
    }

    pub fn periode_terminee(&self) -> bool {
        self.periode_terminee
    }

    pub fn pas_de_temps(&self) -> f64 {
        self.pas_de_temps
    }

    pub fn fenetre(&self) -> &FenetreEchantillons {
        &self.fenetre
    }

    /// Cinématique à l’instant courant.
    pub fn courant(&self) -> EtatCinematique {
        self.parametres.evaluer(self.temps)
    }

    /* ------------------------ Réducteur ------------------------ */

    pub fn reduire(self, action: Action) -> Self {
        match action {
            Action::Tick => self.avancer(),
            Action::BasculerMarche => Self {
                en_marche: !self.en_marche,
                ..self
            },
            Action::Reinitialiser => self.reinitialiser(),
            Action::ChangerParametres(parametres) => {
                tracing::debug!(?parametres, "nouveaux paramètres, nouveau run");
                Self { parametres, ..self }.reinitialiser()
            }
            Action::PeriodeUnique(actif) => Self {
                periode_unique: actif,
                ..self
            }
            .reinitialiser(),
        }
    }

    fn reinitialiser(mut self) -> Self {
        self.temps = 0.0;
        self.periode_terminee = false;
        self.fenetre.clear();

        let longueur_m = self.parametres.longueur_m();
        let e0 = self.parametres.evaluer(0.0);
        self.fenetre.push(Echantillon::depuis(&e0, longueur_m));

        tracing::debug!(capacite = self.fenetre.capacite(), "simulation réinitialisée");
        self
    }

    fn avancer(mut self) -> Self {
        if !self.en_marche {
            return self;
        }

        let t = self.temps + self.pas_de_temps;
        self.temps = t;

        if self.periode_unique && !self.periode_terminee && t >= self.parametres.periode() {
            self.periode_terminee = true;
            self.en_marche = false;
            tracing::info!(temps = t, "période complète, arrêt");
        }

        let etat = self.parametres.evaluer(t);
        let longueur_m = self.parametres.longueur_m();
        self.fenetre.push(Echantillon::depuis(&etat, longueur_m));
        self
    }
}
