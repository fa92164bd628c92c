//! Tests fractions de π : affichage, repli décimal, saisie inverse, unités.

use std::f64::consts::PI;

use proptest::prelude::*;

use super::erreur::ErreurPendule;
use super::fraction_pi::{
    essayer_fraction_pi, formater_fraction, format_fraction_pi, fraction_proche,
    parse_fraction_pi, texte_fraction, valeur_fraction_pi, AffichageAngle, UniteAngle,
    ANGLE_PAR_DEFAUT,
};

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn fractions_usuelles() {
    assert_eq!(format_fraction_pi(PI / 4.0), "π/4");
    assert_eq!(format_fraction_pi(-PI / 2.0), "-π/2");
    assert_eq!(format_fraction_pi(0.0), "0");
    assert_eq!(format_fraction_pi(PI), "π");
    assert_eq!(format_fraction_pi(-PI), "-π");
    assert_eq!(format_fraction_pi(2.0 * PI), "2π");
    assert_eq!(format_fraction_pi(3.0 * PI / 2.0), "3π/2");
    assert_eq!(format_fraction_pi(PI / 6.0), "π/6");
    assert_eq!(format_fraction_pi(-5.0 * PI / 12.0), "-5π/12");
    assert_eq!(format_fraction_pi(7.0 * PI / 4.0), "7π/4");
}

#[test]
fn fraction_reduite_par_pgcd() {
    // 2/4 est trouvé sous d=2 (1/2), 4/6 sous d=3 (2/3) : jamais de forme non réduite
    assert_eq!(format_fraction_pi(2.0 * PI / 3.0), "2π/3");
    let fr = fraction_proche(PI / 2.0).unwrap();
    assert_eq!(*fr.coefficient().numer(), 1);
    assert_eq!(*fr.coefficient().denom(), 2);
}

#[test]
fn zero_sans_signe() {
    assert_eq!(format_fraction_pi(-0.01), "0");
    assert_eq!(format_fraction_pi(-0.0), "0");
}

#[test]
fn petit_angle_absorbe_par_zero() {
    // 0.1 rad = 0.0318π : dans la tolérance 0.05 autour de 0
    assert_eq!(format_fraction_pi(0.1), "0");
}

#[test]
fn ordre_de_la_liste_prime_sur_la_proximite() {
    // 0.29π : π/4 (écart 0.04) est plus proche que π/3 (écart 0.043),
    // mais d=3 est essayé avant d=4.
    assert_eq!(format_fraction_pi(0.29 * PI), "π/3");
    // 0.375π (3π/8 exact) : π/3 à 0.042 passe avant d=8
    assert_eq!(format_fraction_pi(3.0 * PI / 8.0), "π/3");
}

#[test]
fn repli_decimal_deux_chiffres() {
    // 0.053π : hors de toutes les bandes (0 ± 0.05, 1/12 ± 0.025, 1/8 ± 0.025…)
    let s = format_fraction_pi(0.053 * PI);
    assert_eq!(s, "0.05π");

    let neg = format_fraction_pi(-0.053 * PI);
    assert_eq!(neg, "-0.05π");

    // au-delà de 2π : plus aucun candidat
    let grand = format_fraction_pi(2.3 * PI);
    assert_eq!(grand, "2.30π");
    assert!(grand.ends_with('π'));
}

#[test]
fn valeur_simple_signee() {
    assert_eq!(formater_fraction(-PI / 4.0, true), AffichageAngle::Valeur(-0.25));
    assert_eq!(formater_fraction(PI / 3.0, true), AffichageAngle::Valeur(1.0 / 3.0));
    assert_eq!(
        formater_fraction(PI / 3.0, false),
        AffichageAngle::Texte("π/3".into())
    );
    // sans correspondance : texte décimal, même en mode valeur simple
    assert_eq!(
        formater_fraction(0.053 * PI, true),
        AffichageAngle::Texte("0.05π".into())
    );
}

#[test]
fn valeur_pour_graphiques() {
    assert!(proche(valeur_fraction_pi(PI / 2.0), 0.5));
    assert!(proche(valeur_fraction_pi(0.053 * PI), 0.053));
}

/* ------------------------ Saisie inverse ------------------------ */

#[test]
fn saisie_fraction_et_nombre() {
    assert!(proche(parse_fraction_pi("1/2"), PI / 2.0));
    assert!(proche(parse_fraction_pi(" 3 / 4 "), 3.0 * PI / 4.0));
    assert!(proche(parse_fraction_pi("0.25"), PI / 4.0));
    assert!(proche(parse_fraction_pi("-1/6"), -PI / 6.0));
    assert!(proche(parse_fraction_pi("2"), 2.0 * PI));
}

#[test]
fn saisie_illisible_repli_pi_sur_6() {
    for s in ["bogus", "", "1/0", "1/2/3", "a/b", "inf", "/"] {
        assert!(
            proche(parse_fraction_pi(s), ANGLE_PAR_DEFAUT),
            "entrée {s:?}"
        );
        assert!(matches!(
            essayer_fraction_pi(s),
            Err(ErreurPendule::AngleIllisible(_))
        ));
    }
    assert!(proche(ANGLE_PAR_DEFAUT, PI / 6.0));
}

/* ------------------------ Unités / texte du champ ------------------------ */

#[test]
fn texte_du_champ_fraction() {
    assert_eq!(texte_fraction(PI / 4.0), "1/4");
    assert_eq!(texte_fraction(-PI / 2.0), "-1/2");
    assert_eq!(texte_fraction(PI), "1");
    assert_eq!(texte_fraction(0.0), "0");
    assert_eq!(texte_fraction(0.053 * PI), "0.05");
}

#[test]
fn unites_vers_radians() {
    let r = UniteAngle::Degres.vers_radians("30").unwrap();
    assert!(proche(r, PI / 6.0));
    assert!(UniteAngle::Degres.vers_radians("trente").is_err());

    let f = UniteAngle::FractionPi.vers_radians("1/3").unwrap();
    assert!(proche(f, PI / 3.0));
    // unité fraction : repli silencieux
    let g = UniteAngle::FractionPi.vers_radians("???").unwrap();
    assert!(proche(g, PI / 6.0));
}

#[test]
fn bascule_d_unite_aller_retour() {
    let angle = 45f64.to_radians();
    let texte = UniteAngle::FractionPi.texte_pour(angle);
    assert_eq!(texte, "1/4");

    let retour = UniteAngle::FractionPi.vers_radians(&texte).unwrap();
    assert_eq!(UniteAngle::Degres.texte_pour(retour), "45");
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn texte_toujours_termine_par_pi_ou_zero(angle in -8.0f64..8.0) {
        let s = format_fraction_pi(angle);
        prop_assert!(s == "0" || s.ends_with('π') || s.contains("π/"), "s = {}", s);
    }

    #[test]
    fn signe_preserve(angle in 0.2f64..6.0) {
        let pos = format_fraction_pi(angle);
        let neg = format_fraction_pi(-angle);
        prop_assert_eq!(format!("-{pos}"), neg);
    }

    #[test]
    fn fraction_reconnue_dans_sa_tolerance(angle in -2.0 * PI..2.0 * PI) {
        if let Some(fr) = fraction_proche(angle) {
            let ecart = (angle.abs() / PI - fr.valeur().abs()).abs();
            prop_assert!(ecart <= 0.05 + 1e-12, "ecart = {}", ecart);
        }
    }

    #[test]
    fn saisie_fraction_entiere(a in -24i64..24, b in 1i64..24) {
        let v = parse_fraction_pi(&format!("{a}/{b}"));
        prop_assert!((v - (a as f64 / b as f64) * PI).abs() < 1e-12);
    }
}
