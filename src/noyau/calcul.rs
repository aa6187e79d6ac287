// src/noyau/calcul.rs
//
// Machine à pile : exécute une RPN sur des f64.
// Chaque opération vérifie son domaine AVANT de calculer.

use super::erreur::{ErreurCalc, Resultat};
use super::jetons::{Jeton, Operateur};
use super::trig::{trig_degres, TrigFn};

/// a op b, avec gardes de domaine.
pub fn appliquer_operateur(op: Operateur, gauche: f64, droite: f64) -> Resultat<f64> {
    match op {
        Operateur::Plus => Ok(gauche + droite),
        Operateur::Moins => Ok(gauche - droite),
        Operateur::Fois => Ok(gauche * droite),
        Operateur::Divise => {
            if droite == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            Ok(gauche / droite)
        }
        Operateur::Puissance => {
            if gauche == 0.0 && droite < 0.0 {
                return Err(ErreurCalc::ZeroPuissanceNegative);
            }
            if gauche < 0.0 && droite.fract() != 0.0 {
                return Err(ErreurCalc::PuissanceFractionnaireNegative);
            }
            Ok(gauche.powf(droite))
        }
    }
}

/// f(x) pour les fonctions unaires reconnues.
pub fn appliquer_fonction(nom: &str, x: f64) -> Resultat<f64> {
    if let Some(t) = TrigFn::depuis_nom(nom) {
        return trig_degres(t, x);
    }

    match nom {
        "sqrt" => {
            if x < 0.0 {
                return Err(ErreurCalc::RacineNegative);
            }
            Ok(x.sqrt())
        }
        "log" | "ln" => {
            if x <= 0.0 {
                return Err(ErreurCalc::LogarithmeNonPositif(nom.to_string()));
            }
            Ok(if nom == "log" { x.log10() } else { x.ln() })
        }
        _ => Err(ErreurCalc::FonctionInconnue(nom.to_string())),
    }
}

/// Évalue une RPN. La pile doit finir avec exactement une valeur.
pub fn eval_rpn(rpn: &[Jeton]) -> Resultat<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(v) => pile.push(*v),

            Jeton::Operateur(op) => {
                // droite a été empilée en dernier
                let (Some(droite), Some(gauche)) = (pile.pop(), pile.pop()) else {
                    return Err(ErreurCalc::OperandesManquants(op.symbole()));
                };
                pile.push(appliquer_operateur(*op, gauche, droite)?);
            }

            Jeton::Fonction(nom) => {
                let x = pile
                    .pop()
                    .ok_or_else(|| ErreurCalc::ArgumentManquant(nom.clone()))?;
                pile.push(appliquer_fonction(nom, x)?);
            }

            autre => {
                log::warn!("eval_rpn: jeton inattendu ignoré: {autre:?}");
            }
        }
    }

    match pile.as_slice() {
        [resultat] => Ok(*resultat),
        _ => Err(ErreurCalc::SyntaxeInvalide),
    }
}
