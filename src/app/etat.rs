//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, erreur, démarche)
//! et offrir les actions des touches (C, DEL, =, chiffres, fonctions…).
//!
//! Contrats :
//! - Aucun parsing ici : l’entrée brute part telle quelle au noyau.
//! - Après "=", un chiffre / "." / une fonction repart d’une entrée vide ;
//!   un opérateur / une parenthèse / "%" continue sur le résultat.
//! - Une fonction s’insère avec sa parenthèse ouvrante ("sqrt" -> "sqrt(").

use calculatrice_rpn::noyau::{trace_expression, Demarche};

/// Texte affiché quand l’évaluation échoue (le détail est dans `erreur`).
pub const TEXTE_ERREUR: &str = "Erreur";

/// Fonctions proposées par le pavé scientifique.
pub const FONCTIONS: [&str; 6] = ["sqrt", "log", "ln", "sin", "cos", "tan"];

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub erreur: String, // message du noyau (vide si OK)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    /// Vrai juste après "=" (résultat OU erreur affichés).
    pub vient_d_evaluer: bool,
}

impl AppCalc {
    /// Ce que montre l’écran de la calculatrice.
    pub fn affichage(&self) -> &str {
        if !self.erreur.is_empty() {
            TEXTE_ERREUR
        } else if self.entree.is_empty() {
            "0"
        } else {
            &self.entree
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// C : remise à zéro (entrée + erreur + démarche).
    pub fn clear(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.vient_d_evaluer = false;
    }

    /// DEL / Backspace : retire le dernier caractère.
    pub fn backspace(&mut self) {
        self.entree.pop();
        self.erreur.clear();
    }

    /// Chiffres, ".", opérateurs, parenthèses, "%" et fonctions.
    pub fn appuyer(&mut self, touche: &str) {
        let est_fonction = FONCTIONS.contains(&touche);

        if self.vient_d_evaluer {
            let premier = touche.chars().next().unwrap_or(' ');
            if premier.is_ascii_digit() || touche == "." || est_fonction {
                // nouveau calcul
                self.entree.clear();
                self.vient_d_evaluer = false;
            } else if "+-*/^()%".contains(premier) {
                // on continue sur le résultat
                self.vient_d_evaluer = false;
            }
        }
        self.erreur.clear();

        self.entree.push_str(touche);
        if est_fonction {
            self.entree.push('(');
        }
    }

    /// "=" / Enter : évalue via le noyau, puis dépose résultat ou erreur.
    ///
    /// Succès : l’entrée devient le résultat formaté ("%g"), pour enchaîner.
    /// Échec : l’entrée est conservée, l’écran affiche `TEXTE_ERREUR`.
    pub fn evaluer(&mut self) {
        match trace_expression(&self.entree) {
            Ok(d) => {
                self.entree = d.resultat.clone();
                self.demarche = d;
                self.erreur.clear();
            }
            Err(e) => {
                log::info!("évaluation refusée pour {:?}: {e}", self.entree);
                self.erreur = e.to_string();
                self.demarche = Demarche::default();
            }
        }
        self.vient_d_evaluer = true;
    }

    /// Dispatch d’une étiquette de bouton.
    pub fn touche(&mut self, label: &str) {
        match label {
            "C" => self.clear(),
            "=" => self.evaluer(),
            "DEL" => self.backspace(),
            autre => self.appuyer(autre),
        }
    }
}
