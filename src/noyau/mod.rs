//! Noyau de calcul f64
//!
//! Organisation interne :
//! - jetons.rs   : lexeur à la demande (Jeton, Operateur)
//! - rpn.rs      : shunting-yard -> RPN
//! - calcul.rs   : machine à pile + gardes de domaine
//! - trig.rs     : trigonométrie en degrés + tan indéfinie
//! - erreur.rs   : ErreurCalc + catégories
//! - format.rs   : affichage "%g" (6 chiffres significatifs)
//! - eval.rs     : pipeline complet

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Categorie, ErreurCalc};
pub use eval::{eval_expression, trace_expression, Demarche};
pub use format::format_resultat;
