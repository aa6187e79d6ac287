// src/noyau/trig.rs
//
// Trigonométrie en DEGRÉS
// - sin/cos : conversion deg -> rad puis f64
// - tan : indéfinie si l’angle ≡ 90° (mod 180°), à TOLERANCE_TAN près

use std::f64::consts::PI;

use super::erreur::{ErreurCalc, Resultat};

/// Écart (en degrés) sous lequel tan est considérée indéfinie.
pub const TOLERANCE_TAN: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(TrigFn::Sin),
            "cos" => Some(TrigFn::Cos),
            "tan" => Some(TrigFn::Tan),
            _ => None,
        }
    }
}

pub fn deg_vers_rad(degres: f64) -> f64 {
    degres * PI / 180.0
}

/// Angle ≡ 90° (mod 180°) ?
pub fn tan_indefinie(degres: f64) -> bool {
    let r = (degres - 90.0).rem_euclid(180.0);
    r < TOLERANCE_TAN || 180.0 - r < TOLERANCE_TAN
}

/// Applique sin/cos/tan à un angle en degrés.
pub fn trig_degres(f: TrigFn, degres: f64) -> Resultat<f64> {
    let rad = deg_vers_rad(degres);
    match f {
        TrigFn::Sin => Ok(rad.sin()),
        TrigFn::Cos => Ok(rad.cos()),
        TrigFn::Tan => {
            if tan_indefinie(degres) {
                return Err(ErreurCalc::TangenteIndefinie(degres));
            }
            Ok(rad.tan())
        }
    }
}
