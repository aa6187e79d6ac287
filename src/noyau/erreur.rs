// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// Une seule enum pour tout le pipeline (jetons -> RPN -> pile).
// La première erreur rencontrée arrête tout : pas de résultat partiel.

use thiserror::Error;

/// Famille d’erreur (utile pour l’UI et les tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    /// Caractère non reconnu dans l’entrée.
    Lexicale,
    /// Parenthèses, opérandes manquants, pile finale incohérente.
    Structurelle,
    /// Opération mathématiquement indéfinie (÷0, log(0), tan(90)…).
    Domaine,
    /// Nom de fonction inconnu.
    IdentifiantInconnu,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("caractère invalide dans l’expression: '{0}'")]
    CaractereInvalide(char),

    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    #[error("pas assez d’opérandes pour l’opérateur '{0}'")]
    OperandesManquants(char),

    #[error("la fonction '{0}' exige un argument")]
    ArgumentManquant(String),

    #[error("syntaxe d’expression invalide")]
    SyntaxeInvalide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("zéro élevé à une puissance négative")]
    ZeroPuissanceNegative,

    #[error("base négative avec un exposant non entier")]
    PuissanceFractionnaireNegative,

    #[error("racine carrée d’un nombre négatif")]
    RacineNegative,

    #[error("{0} : argument négatif ou nul")]
    LogarithmeNonPositif(String),

    #[error("tan indéfinie pour {0}°")]
    TangenteIndefinie(f64),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),
}

impl ErreurCalc {
    pub fn categorie(&self) -> Categorie {
        use ErreurCalc::*;

        match self {
            CaractereInvalide(_) => Categorie::Lexicale,

            ParenthesesNonAppariees
            | OperandesManquants(_)
            | ArgumentManquant(_)
            | SyntaxeInvalide => Categorie::Structurelle,

            DivisionParZero
            | ZeroPuissanceNegative
            | PuissanceFractionnaireNegative
            | RacineNegative
            | LogarithmeNonPositif(_)
            | TangenteIndefinie(_) => Categorie::Domaine,

            FonctionInconnue(_) => Categorie::IdentifiantInconnu,
        }
    }
}

/// Alias du pipeline.
pub type Resultat<T> = Result<T, ErreurCalc>;
