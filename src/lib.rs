//! Calculatrice RPN — noyau réutilisable (sans UI).
//!
//! `eval_expression("3 + 4 * 2") == Ok(11.0)`

pub mod noyau;

pub use noyau::{eval_expression, format_resultat, Categorie, ErreurCalc};
