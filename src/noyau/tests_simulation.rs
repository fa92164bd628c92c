//! Tests simulation : réducteur, fenêtre bornée, mode une période.
//!
//! Invariant clé : la fenêtre ne dépasse jamais sa capacité, quelle que soit la durée du run.

use std::f64::consts::PI;

use proptest::prelude::*;

use super::parametres::ParametresPendule;
use super::simulation::{Action, EtatSimulation, FenetreEchantillons, PAS_DE_TEMPS_DEFAUT};

fn params_defaut() -> ParametresPendule {
    ParametresPendule::new(100.0, 9.8, PI / 6.0, true, 0.1)
        .unwrap_or_else(|e| panic!("paramètres par défaut refusés: {e}"))
}

fn ticks(mut etat: EtatSimulation, n: usize) -> EtatSimulation {
    for _ in 0..n {
        etat = etat.reduire(Action::Tick);
    }
    etat
}

#[test]
fn run_initial_amorce_a_t0() {
    let etat = EtatSimulation::new(params_defaut(), PAS_DE_TEMPS_DEFAUT, 100);
    assert_eq!(etat.temps(), 0.0);
    assert!(etat.en_marche());
    assert_eq!(etat.fenetre().len(), 1);

    let e0 = etat.fenetre().dernier().unwrap();
    assert_eq!(e0.temps, 0.0);
    assert_eq!(e0.position, PI / 6.0 * 1.0);
    assert_eq!(e0.affichage, "π/6");
}

#[test]
fn tick_avance_d_un_pas_fixe() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), 10);
    assert!((etat.temps() - 0.5).abs() < 1e-12);
    assert_eq!(etat.fenetre().len(), 11);

    let dernier = etat.fenetre().dernier().unwrap();
    let attendu = etat.courant().tangentielles(1.0);
    assert_eq!(dernier.position, attendu.position_arc);
    assert_eq!(dernier.vitesse, attendu.vitesse);
    assert_eq!(dernier.acceleration, attendu.acceleration);
}

#[test]
fn pause_gele_le_temps() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), 4);
    let pause = etat.reduire(Action::BasculerMarche);
    assert!(!pause.en_marche());

    let apres = ticks(pause.clone(), 20);
    assert_eq!(apres, pause);

    let reprise = apres.reduire(Action::BasculerMarche).reduire(Action::Tick);
    assert!((reprise.temps() - 0.25).abs() < 1e-12);
}

#[test]
fn changement_de_parametres_redemarre() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), 30);
    let nouveaux = etat.parametres().avec_longueur(150.0).unwrap();
    let etat = etat.reduire(Action::ChangerParametres(nouveaux));

    assert_eq!(etat.temps(), 0.0);
    assert_eq!(etat.fenetre().len(), 1);
    assert_eq!(etat.parametres().longueur_cm(), 150.0);
    assert!(etat.en_marche());
}

#[test]
fn reinitialiser_conserve_la_pause() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), 5)
        .reduire(Action::BasculerMarche)
        .reduire(Action::Reinitialiser);
    assert_eq!(etat.temps(), 0.0);
    assert!(!etat.en_marche());
    assert_eq!(etat.fenetre().len(), 1);
}

#[test]
fn une_seule_periode_arrete_a_t() {
    let p = params_defaut();
    let periode = p.periode();
    let mut etat = EtatSimulation::new(p, 0.05, 100).reduire(Action::PeriodeUnique(true));

    let mut n = 0;
    while etat.en_marche() {
        etat = etat.reduire(Action::Tick);
        n += 1;
        assert!(n < 1_000, "la simulation ne s’arrête pas");
    }

    assert!(etat.periode_terminee());
    assert!(etat.temps() >= periode);
    assert!(etat.temps() < periode + 0.05 + 1e-9);

    // reprise manuelle : pas de nouvel arrêt automatique
    let etat = ticks(etat.reduire(Action::BasculerMarche), 100);
    assert!(etat.en_marche());
}

#[test]
fn sans_mode_periode_pas_d_arret() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), 500);
    assert!(etat.en_marche());
    assert!(!etat.periode_terminee());
}

#[test]
fn pas_de_temps_invalide_remplace() {
    let etat = EtatSimulation::new(params_defaut(), -1.0, 100);
    assert_eq!(etat.pas_de_temps(), PAS_DE_TEMPS_DEFAUT);
    let etat = EtatSimulation::new(params_defaut(), f64::NAN, 100);
    assert_eq!(etat.pas_de_temps(), PAS_DE_TEMPS_DEFAUT);
}

#[test]
fn fenetre_evince_les_plus_anciens() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 10), 25);
    let f = etat.fenetre();
    assert_eq!(f.len(), 10);

    let temps: Vec<f64> = f.iter().map(|e| e.temps).collect();
    assert!(temps.windows(2).all(|w| w[0] < w[1]));
    assert!((temps[9] - 25.0 * 0.05).abs() < 1e-9);
    assert!((temps[0] - 16.0 * 0.05).abs() < 1e-9);
}

#[test]
fn capacite_nulle_ramenee_a_un() {
    let f = FenetreEchantillons::new(0);
    assert_eq!(f.capacite(), 1);
    assert!(f.is_empty());
}

#[test]
fn serie_pour_graphique() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), 3);
    let serie = etat.fenetre().serie(|e| e.vitesse);
    assert_eq!(serie.len(), 4);
    assert_eq!(serie[0][0], 0.0);
}

proptest! {
    #[test]
    fn fenetre_jamais_au_dela_de_la_capacite(
        capacite in 1usize..150,
        n in 0usize..600,
    ) {
        let mut etat = EtatSimulation::new(params_defaut(), 0.05, capacite);
        for _ in 0..n {
            etat = etat.reduire(Action::Tick);
            prop_assert!(etat.fenetre().len() <= capacite);
        }
        prop_assert_eq!(etat.fenetre().len(), (n + 1).min(capacite));
    }

    #[test]
    fn reinitialiser_remet_toujours_a_zero(n in 0usize..200) {
        let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), n)
            .reduire(Action::Reinitialiser);
        prop_assert_eq!(etat.temps(), 0.0);
        prop_assert_eq!(etat.fenetre().len(), 1);
        prop_assert!(!etat.periode_terminee());
    }
}

#[test]
fn record_provisoire_vide_et_en_pause() {
    let p = EtatSimulation::provisoire();
    assert!(p.fenetre().is_empty());
    assert!(!p.en_marche());
    assert_eq!(p.temps(), 0.0);

    // en pause : un tick ne produit aucun échantillon
    let apres = p.reduire(Action::Tick);
    assert!(apres.fenetre().is_empty());
}

#[test]
fn survol_trouve_l_echantillon_le_plus_proche() {
    let etat = ticks(EtatSimulation::new(params_defaut(), 0.05, 100), 10);
    let f = etat.fenetre();

    let e = f.plus_proche(0.26).unwrap();
    assert!((e.temps - 0.25).abs() < 1e-12);
    assert_eq!(f.plus_proche(-3.0).unwrap().temps, 0.0);
    assert!((f.plus_proche(99.0).unwrap().temps - 0.5).abs() < 1e-12);

    assert!(FenetreEchantillons::new(3).plus_proche(0.0).is_none());
}

#[test]
fn angle_pi_suit_la_fraction_reconnue() {
    let etat = EtatSimulation::new(params_defaut(), 0.05, 100);
    let e0 = etat.fenetre().dernier().unwrap();
    assert!((e0.angle_pi - 1.0 / 6.0).abs() < 1e-12);
}
