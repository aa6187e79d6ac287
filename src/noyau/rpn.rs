// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Lire l’expression jeton par jeton (Lexeur) et produire une suite postfixée
//
// Règles:
// - Fonction: empilée, sortie après son argument (parenthèse fermante)
//   ou dès qu’un opérateur arrive par-dessus
// - Moins unaire:
//    - si '-' arrive au début, après un opérateur, '(' ou une fonction,
//      on injecte 0 : "-x" => "0 x -"
// - Première erreur = arrêt (pas de RPN partielle)

use super::erreur::{ErreurCalc, Resultat};
use super::jetons::{Jeton, Lexeur, Operateur};

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Debug, PartialEq)]
enum Pile {
    Op(Operateur),
    /// '-' préfixe : sort comme une soustraction binaire (le 0 est déjà en sortie).
    MoinsUnaire,
    ParOuvrante,
    Fonction(String),
}

impl Pile {
    fn en_jeton(self) -> Jeton {
        match self {
            Pile::Op(op) => Jeton::Operateur(op),
            Pile::MoinsUnaire => Jeton::Operateur(Operateur::Moins),
            Pile::ParOuvrante => Jeton::ParOuvrante,
            Pile::Fonction(nom) => Jeton::Fonction(nom),
        }
    }
}

/// Le '-' courant est-il un moins unaire, vu le jeton précédent ?
fn est_moins_unaire(op: Operateur, precedent: Option<&Jeton>) -> bool {
    op == Operateur::Moins
        && matches!(
            precedent,
            None | Some(Jeton::Operateur(_) | Jeton::ParOuvrante | Jeton::Fonction(_))
        )
}

/// Le sommet de pile doit-il sortir avant d’empiler l’opérateur binaire `courant` ?
fn doit_depiler(sommet: &Pile, courant: Operateur) -> bool {
    match sommet {
        Pile::Op(top) => {
            top.precedence() > courant.precedence()
                || (top.precedence() == courant.precedence() && !courant.est_associatif_droite())
        }
        // plus fort que * et /, moins fort que ^ : -2^2 = -4
        Pile::MoinsUnaire => courant != Operateur::Puissance,
        // une fonction colle toujours plus fort qu’un opérateur en attente
        Pile::Fonction(_) => true,
        Pile::ParOuvrante => false,
    }
}

/// Convertit une expression infixe en RPN (notation polonaise inversée).
///
/// Le moins unaire devient une soustraction depuis 0 : "-x" => "0 x -".
/// Il ne dépile rien à son arrivée, donc "3*-2" => "3 0 2 - *".
///
/// Exemple:
///   "sqrt(16)+2"  =>  [16, sqrt, 2, +]
pub fn to_rpn(expression: &str) -> Resultat<Vec<Jeton>> {
    let mut lexeur = Lexeur::new(expression);
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut pile: Vec<Pile> = Vec::new();
    let mut precedent: Option<Jeton> = None;

    loop {
        let jeton = lexeur.jeton_suivant();
        log::trace!("to_rpn: jeton {jeton:?}, pile {}", pile.len());

        match &jeton {
            Jeton::Invalide(c) => return Err(ErreurCalc::CaractereInvalide(*c)),
            Jeton::Fin => break,

            Jeton::Nombre(_) => sortie.push(jeton.clone()),

            Jeton::Fonction(nom) => pile.push(Pile::Fonction(nom.clone())),
            Jeton::ParOuvrante => pile.push(Pile::ParOuvrante),

            Jeton::Operateur(op) => {
                if est_moins_unaire(*op, precedent.as_ref()) {
                    sortie.push(Jeton::Nombre(0.0));
                    pile.push(Pile::MoinsUnaire);
                } else {
                    while let Some(sommet) = pile.pop_if(|s| doit_depiler(s, *op)) {
                        sortie.push(sommet.en_jeton());
                    }
                    pile.push(Pile::Op(*op));
                }
            }

            Jeton::ParFermante => {
                // dépile jusqu’à '('
                let mut trouvee = false;
                while let Some(top) = pile.pop() {
                    if top == Pile::ParOuvrante {
                        trouvee = true;
                        break;
                    }
                    sortie.push(top.en_jeton());
                }
                if !trouvee {
                    return Err(ErreurCalc::ParenthesesNonAppariees);
                }

                // si une fonction est au sommet, elle s’applique au groupe fermé
                if let Some(f) = pile.pop_if(|s| matches!(s, Pile::Fonction(_))) {
                    sortie.push(f.en_jeton());
                }
            }
        }

        precedent = Some(jeton);
    }

    // vide la pile
    while let Some(top) = pile.pop() {
        if top == Pile::ParOuvrante {
            return Err(ErreurCalc::ParenthesesNonAppariees);
        }
        sortie.push(top.en_jeton());
    }

    Ok(sortie)
}
