// src/noyau/erreur.rs
//
// Erreurs du noyau pendule.
// - ParametreInvalide : refus d’un jeu de paramètres (l’état précédent reste en place)
// - AngleIllisible    : saisie d’angle non reconnue (version stricte du parseur)

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurPendule {
    #[error("paramètre invalide : {nom} = {valeur}")]
    ParametreInvalide { nom: &'static str, valeur: f64 },

    #[error("angle illisible : {0:?}")]
    AngleIllisible(String),
}

impl ErreurPendule {
    pub(crate) fn parametre(nom: &'static str, valeur: f64) -> Self {
        Self::ParametreInvalide { nom, valeur }
    }
}
