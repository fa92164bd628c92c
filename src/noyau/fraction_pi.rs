// src/noyau/fraction_pi.rs
//
// Angles “jolis” : fraction de π la plus proche (π/4, -π/2, 3π/2…)
// ----------------------------------------------------------------
// - Dénominateurs candidats dans un ordre FIXE : {1,2,3,4,6,8,12}
// - Le premier dénominateur (ordre de la liste) qui tombe dans sa tolérance gagne,
//   même si un dénominateur suivant serait plus proche.
// - Pas de correspondance => lecture décimale à 2 chiffres ("0.37π")
//
// Sens inverse : saisie "a/b" ou "x" (multiple de π) -> radians, repli π/6.

use std::f64::consts::PI;
use std::fmt;

use num_rational::Rational64;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurPendule;

/// (dénominateur, tolérance absolue sur |angle|/π), dans l’ordre de priorité.
const CANDIDATS: [(i64, f64); 7] = [
    (1, 0.05),
    (2, 0.05),
    (3, 0.05),
    (4, 0.05),
    (6, 0.05),
    (8, 0.025),
    (12, 0.025),
];

/// Valeur de repli quand la saisie n’est pas lisible.
pub const ANGLE_PAR_DEFAUT: f64 = PI / 6.0;

/* ------------------------ Fraction reconnue ------------------------ */

/// Coefficient rationnel signé de π, réduit (numérateur/dénominateur premiers entre eux).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractionPi(Rational64);

impl FractionPi {
    pub fn coefficient(&self) -> Rational64 {
        self.0
    }

    /// Multiple de π en flottant (ex: -1/2 pour -π/2).
    pub fn valeur(&self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }
}

/// coeff·π : π, -π, 2π, π/4, -3π/2…
impl fmt::Display for FractionPi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        if c.is_zero() {
            return f.write_str("0");
        }

        let signe = if c.is_negative() { "-" } else { "" };
        let n = c.numer().abs();
        let d = *c.denom();

        match (n, d) {
            (1, 1) => write!(f, "{signe}π"),
            (_, 1) => write!(f, "{signe}{n}π"),
            (1, _) => write!(f, "{signe}π/{d}"),
            _ => write!(f, "{signe}{n}π/{d}"),
        }
    }
}

/// Cherche la première fraction candidate dans sa tolérance.
pub fn fraction_proche(angle: f64) -> Option<FractionPi> {
    let abs = (angle / PI).abs();
    let signe = if angle < 0.0 { -1 } else { 1 };

    for (denom, tolerance) in CANDIDATS {
        // multiples jusqu’à 2π
        for num in 0..=2 * denom {
            let valeur = num as f64 / denom as f64;
            if (abs - valeur).abs() <= tolerance {
                // Rational64::new réduit par le pgcd
                return Some(FractionPi(Rational64::new(signe * num, denom)));
            }
        }
    }
    None
}

/* ------------------------ Affichage ------------------------ */

/// Sortie du formateur : texte ("π/4", "0.37π") ou valeur simple (multiple de π, pour graphiques).
#[derive(Clone, Debug, PartialEq)]
pub enum AffichageAngle {
    Texte(String),
    Valeur(f64),
}

impl fmt::Display for AffichageAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texte(s) => f.write_str(s),
            Self::Valeur(v) => write!(f, "{v}"),
        }
    }
}

/// Formate un angle (radians) en fraction de π.
///
/// - `valeur_simple = false` : texte ("π/4", "-π/2", "0", "π", "3π/2"…)
/// - `valeur_simple = true`  : multiple signé de π (ex: 0.25)
///
/// Sans correspondance, les deux modes rendent le texte décimal "x.xxπ".
pub fn formater_fraction(angle: f64, valeur_simple: bool) -> AffichageAngle {
    match fraction_proche(angle) {
        Some(fr) if valeur_simple => AffichageAngle::Valeur(fr.valeur()),
        Some(fr) => AffichageAngle::Texte(fr.to_string()),
        None => AffichageAngle::Texte(format_decimal_pi(angle)),
    }
}

pub fn format_fraction_pi(angle: f64) -> String {
    formater_fraction(angle, false).to_string()
}

/// Multiple de π pour graphiques (fraction reconnue, sinon valeur brute angle/π).
pub fn valeur_fraction_pi(angle: f64) -> f64 {
    fraction_proche(angle).map_or(angle / PI, |fr| fr.valeur())
}

fn format_decimal_pi(angle: f64) -> String {
    format!("{:.2}π", angle / PI)
}

/// Texte pour le champ de saisie en unité “fraction de π” (sans le symbole) :
/// "1/4", "2", "-1/2", "0", sinon décimal "0.37".
pub fn texte_fraction(angle: f64) -> String {
    match fraction_proche(angle) {
        Some(fr) => {
            let c = fr.coefficient();
            if c.denom().is_one() {
                format!("{}", c.numer())
            } else {
                format!("{}/{}", c.numer(), c.denom())
            }
        }
        None => format!("{:.2}", angle / PI),
    }
}

/* ------------------------ Saisie -> radians ------------------------ */

/// Version stricte : "x" => x·π ; "a/b" => (a/b)·π.
pub fn essayer_fraction_pi(entree: &str) -> Result<f64, ErreurPendule> {
    let illisible = || ErreurPendule::AngleIllisible(entree.to_string());
    let s = entree.trim();

    if let Ok(x) = s.parse::<f64>() {
        return if x.is_finite() {
            Ok(x * PI)
        } else {
            Err(illisible())
        };
    }

    let (a, b) = s.split_once('/').ok_or_else(illisible)?;
    let num: f64 = a.trim().parse().map_err(|_| illisible())?;
    let den: f64 = b.trim().parse().map_err(|_| illisible())?;

    if !num.is_finite() || !den.is_finite() || den == 0.0 {
        return Err(illisible());
    }
    Ok((num / den) * PI)
}

/// Version tolérante (comportement du champ de saisie) : repli silencieux sur π/6.
pub fn parse_fraction_pi(entree: &str) -> f64 {
    match essayer_fraction_pi(entree) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(erreur = %e, "saisie d’angle illisible, repli sur π/6");
            ANGLE_PAR_DEFAUT
        }
    }
}

/* ------------------------ Unités de saisie ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniteAngle {
    #[default]
    Degres,
    FractionPi,
}

impl UniteAngle {
    /// Convertit la saisie manuelle en radians.
    ///
    /// - Degrés : lecture stricte (une saisie illisible est refusée).
    /// - Fraction de π : lecture tolérante (repli π/6).
    pub fn vers_radians(self, texte: &str) -> Result<f64, ErreurPendule> {
        match self {
            Self::Degres => {
                let d: f64 = texte
                    .trim()
                    .parse()
                    .map_err(|_| ErreurPendule::AngleIllisible(texte.to_string()))?;
                if !d.is_finite() {
                    return Err(ErreurPendule::AngleIllisible(texte.to_string()));
                }
                Ok(d.to_radians())
            }
            Self::FractionPi => Ok(parse_fraction_pi(texte)),
        }
    }

    /// Texte du champ pour un angle donné, dans cette unité.
    pub fn texte_pour(self, angle: f64) -> String {
        match self {
            Self::Degres => format!("{}", angle.to_degrees().round()),
            Self::FractionPi => texte_fraction(angle),
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Self::Degres => "degrés",
            Self::FractionPi => "radians (× π)",
        }
    }
}
