//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * une expression bien formée donne un résultat OU une erreur de domaine
//!   * sa RPN ne contient aucune parenthèse et laisse exactement 1 valeur
//!   * même entrée => même sortie

use std::time::{Duration, Instant};

use super::erreur::Categorie;
use super::eval_expression;
use super::jetons::Jeton;
use super::rpn::to_rpn;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions bien formées ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    match rng.pick(4) {
        0 => format!("{entier}.{}", rng.pick(100)),
        1 => format!("{entier}%"),
        _ => format!("{entier}"),
    }
}

fn gen_fonction(rng: &mut Rng) -> &'static str {
    match rng.pick(6) {
        0 => "sqrt",
        1 => "log",
        2 => "ln",
        3 => "sin",
        4 => "cos",
        _ => "tan",
    }
}

fn gen_operateur(rng: &mut Rng) -> char {
    match rng.pick(5) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        _ => '^',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => format!("-{}", gen_expr(rng, depth - 1)),
        2 => format!("{}({})", gen_fonction(rng), gen_expr(rng, depth - 1)),
        3 => format!("({})", gen_expr(rng, depth - 1)),
        _ => {
            // espaces aléatoires autour de l’opérateur
            let sep = if rng.coin() { " " } else { "" };
            format!(
                "{}{sep}{}{sep}{}",
                gen_expr(rng, depth - 1),
                gen_operateur(rng),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Profondeur de pile simulée sur une RPN : doit finir à 1 sans jamais manquer.
fn pile_equilibree(rpn: &[Jeton]) -> bool {
    let mut profondeur: usize = 0;
    for j in rpn {
        match j {
            Jeton::Nombre(_) => profondeur += 1,
            Jeton::Operateur(_) => {
                if profondeur < 2 {
                    return false;
                }
                profondeur -= 1;
            }
            Jeton::Fonction(_) => {
                if profondeur < 1 {
                    return false;
                }
            }
            _ => return false,
        }
    }
    profondeur == 1
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        let rpn = to_rpn(&expr).unwrap_or_else(|e| panic!("to_rpn({expr:?}) err={e}"));
        assert!(
            pile_equilibree(&rpn),
            "RPN mal formée pour expr={expr:?}: {rpn:?}"
        );

        match eval_expression(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert_eq!(
                    e.categorie(),
                    Categorie::Domaine,
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_idempotence() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let a = eval_expression(&expr);
        let b = eval_expression(&expr);

        match (&a, &b) {
            // NaN != NaN : on compare les bits
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            _ => assert_eq!(a, b, "expr={expr:?}"),
        }
    }
}

#[test]
fn fuzz_safe_texte_arbitraire_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    const ALPHABET: &[char] = &[
        '0', '1', '7', '.', '%', '+', '-', '*', '/', '^', '(', ')', ' ', 's', 'q', 'r', 't',
        'l', 'n', 'X', '@', '\t', 'é',
    ];

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..400 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let expr: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // pas de panique, et une erreur garde son message lisible
        if let Err(e) = eval_expression(&expr) {
            assert!(!e.to_string().is_empty(), "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_caractere_invalide_en_tete() {
    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..100 {
        let expr = format!("@{}", gen_expr(&mut rng, 3));
        assert_eq!(
            eval_expression(&expr).map_err(|e| e.categorie()),
            Err(Categorie::Lexicale),
            "expr={expr:?}"
        );
    }
}
