//! Noyau — évaluation (pipeline réel)
//!
//! texte -> Lexeur (à la demande) -> shunting-yard -> RPN -> pile f64
//!
//! Aucun état entre deux appels : chaque pile naît et meurt dans l’appel.

use super::calcul::eval_rpn;
use super::erreur::Resultat;
use super::format::format_resultat;
use super::jetons::{format_jetons, tokenize};
use super::rpn::to_rpn;

/// Étapes intermédiaires d’une évaluation réussie (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub resultat: String,
}

/// API publique : évalue une expression infixe.
///
/// La première erreur rencontrée (lexicale, structurelle, domaine) est
/// renvoyée telle quelle ; jamais de résultat partiel.
pub fn eval_expression(expression: &str) -> Resultat<f64> {
    log::debug!("eval_expression: {expression:?}");

    let rpn = to_rpn(expression).inspect_err(|e| log::debug!("conversion RPN refusée: {e}"))?;
    log::debug!("rpn: {}", format_jetons(&rpn));

    let valeur = eval_rpn(&rpn).inspect_err(|e| log::debug!("évaluation refusée: {e}"))?;
    log::debug!("résultat: {valeur}");

    Ok(valeur)
}

/// Comme `eval_expression`, mais garde les textes intermédiaires.
pub fn trace_expression(expression: &str) -> Resultat<Demarche> {
    let rpn = to_rpn(expression)?;
    let valeur = eval_rpn(&rpn)?;

    Ok(Demarche {
        jetons: format_jetons(&tokenize(expression)),
        rpn: format_jetons(&rpn),
        resultat: format_resultat(valeur),
    })
}
