// src/noyau/jetons.rs
//
// Lexeur “à la demande” : un jeton par appel, curseur qui ne recule jamais.

/// Un nom de fonction est coupé après 7 lettres (les lettres suivantes
/// forment un nouveau jeton).
pub const LONGUEUR_MAX_FONCTION: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 2,
            Operateur::Fois | Operateur::Divise => 3,
            Operateur::Puissance => 4,
        }
    }

    /// Seul ^ est associatif à droite : 2^3^2 = 2^(3^2).
    pub fn est_associatif_droite(self) -> bool {
        matches!(self, Operateur::Puissance)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Valeur déjà divisée par 100 si le littéral était suivi de `%`.
    Nombre(f64),
    Operateur(Operateur),
    ParOuvrante,
    ParFermante,
    Fonction(String),
    Fin,
    Invalide(char),
}

/// État du lexeur : entrée + position (en octets).
#[derive(Clone, Debug)]
pub struct Lexeur<'a> {
    entree: &'a str,
    position: usize,
}

impl<'a> Lexeur<'a> {
    pub fn new(entree: &'a str) -> Self {
        Self { entree, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    fn courant(&self) -> Option<char> {
        self.entree[self.position..].chars().next()
    }

    fn avance_tant_que(&mut self, mut garde: impl FnMut(char) -> bool) -> &'a str {
        let debut = self.position;
        while let Some(c) = self.courant() {
            if !garde(c) {
                break;
            }
            self.position += c.len_utf8();
        }
        let entree: &'a str = self.entree;
        &entree[debut..self.position]
    }

    /// Jeton suivant. Après la fin de l’entrée, renvoie `Fin` indéfiniment.
    pub fn jeton_suivant(&mut self) -> Jeton {
        // seulement espace et tabulation
        self.avance_tant_que(|c| c == ' ' || c == '\t');

        let Some(c) = self.courant() else {
            return Jeton::Fin;
        };

        // Nombre : suite maximale de chiffres et de points, puis `%` éventuel
        if c.is_ascii_digit() || c == '.' {
            let brut = self.avance_tant_que(|c| c.is_ascii_digit() || c == '.');
            let mut valeur = interpreter_decimal(brut);

            if self.courant() == Some('%') {
                valeur /= 100.0;
                self.position += 1;
            }
            return Jeton::Nombre(valeur);
        }

        // Fonction : minuscules ASCII, 7 au plus
        if c.is_ascii_lowercase() {
            let mut n = 0;
            let nom = self.avance_tant_que(|c| {
                n += 1;
                c.is_ascii_lowercase() && n <= LONGUEUR_MAX_FONCTION
            });
            return Jeton::Fonction(nom.to_string());
        }

        self.position += c.len_utf8();

        if let Some(op) = Operateur::depuis_char(c) {
            return Jeton::Operateur(op);
        }
        match c {
            '(' => Jeton::ParOuvrante,
            ')' => Jeton::ParFermante,
            autre => Jeton::Invalide(autre),
        }
    }
}

/// Interprète une suite de chiffres/points comme le ferait `strtod` :
/// le plus long préfixe `chiffres* ('.' chiffres*)?` qui contient au moins un
/// chiffre. "1.2.3" -> 1.2 ; "." -> 0.
fn interpreter_decimal(brut: &str) -> f64 {
    let fin_entier = brut
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(brut.len());
    let (entier, reste) = brut.split_at(fin_entier);

    let fraction = match reste.strip_prefix('.') {
        Some(apres_point) => {
            let fin = apres_point
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(apres_point.len());
            &apres_point[..fin]
        }
        None => "",
    };

    if entier.is_empty() && fraction.is_empty() {
        return 0.0;
    }

    let entier = if entier.is_empty() { "0" } else { entier };
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{entier}.{fraction}").parse::<f64>().unwrap_or(0.0)
}

/// Tous les jetons jusqu’à `Fin` (exclu). Un `Invalide` est gardé tel quel.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut lexeur = Lexeur::new(s);
    let mut out = Vec::new();
    loop {
        match lexeur.jeton_suivant() {
            Jeton::Fin => break,
            j => out.push(j),
        }
    }
    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let textes: Vec<String> = jetons
        .iter()
        .map(|j| match j {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Operateur(op) => op.symbole().to_string(),
            Jeton::ParOuvrante => "(".to_string(),
            Jeton::ParFermante => ")".to_string(),
            Jeton::Fonction(nom) => nom.clone(),
            Jeton::Fin => "⊣".to_string(),
            Jeton::Invalide(c) => format!("?{c}"),
        })
        .collect();
    textes.join(" ")
}
