//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs typées attendues (division par zéro, domaine…)
//! - invariant clé : jamais de panique, jamais de NaN rendu à l'appelant

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::evaluer;
use super::fonctions::ModeAngle;

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

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        4 => "0".to_string(),
        5 => format!("-{}", 1 + rng.pick(9)),
        _ => format!("{}", 1 + rng.pick(99)),
    }
}

fn gen_fonction(rng: &mut Rng) -> &'static str {
    match rng.pick(11) {
        0 => "sin",
        1 => "cos",
        2 => "tan",
        3 => "cot",
        4 => "asin",
        5 => "acos",
        6 => "atan",
        7 => "acot",
        8 => "sqrt",
        9 => "ln",
        _ => "log",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(8) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("{}({})", gen_fonction(rng), gen_expr(rng, depth - 1)),
        // exposant petit et entier : ^ sur des flottants explose vite sinon
        6 => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
        _ => {
            // parenthèse ouverte non fermée : l'auto-complétion doit la rattraper
            format!("({}", gen_expr(rng, depth - 1))
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique_ni_de_nan() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        let mode = if rng.coin() {
            ModeAngle::Radians
        } else {
            ModeAngle::Degres
        };

        match evaluer(&expr, mode, true) {
            Ok(v) => {
                // contrat : jamais de NaN rendu (l'infini reste possible via cot)
                assert!(!v.is_nan(), "NaN rendu pour expr={expr:?}");
                seen_ok += 1;
            }
            Err(ErreurEval::DivisionParZero) | Err(ErreurEval::ExpressionInvalide(_)) => {
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes sorties.
    let gen_lot = |seed: u64| -> Vec<Result<f64, ErreurEval>> {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| evaluer(&gen_expr(&mut rng, 4), ModeAngle::Radians, true))
            .collect()
    };

    let a = gen_lot(0xBADC0DE_u64);
    let b = gen_lot(0xBADC0DE_u64);
    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_auto_completion_rattrape_les_ouvrantes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..80 {
        budget(t0, max);

        // saisie tronquée volontairement : que des '(' excédentaires
        let expr = format!("({}", gen_expr(&mut rng, 3));

        // auto activé : l'échec éventuel doit venir du CONTENU, jamais du
        // déséquilibre de parenthèses (il est complété avant parse)
        if let Err(ErreurEval::ExpressionInvalide(cause)) = evaluer(&expr, ModeAngle::Radians, true)
        {
            assert!(
                !cause.contains("non fermées"),
                "complétion censée rattraper: expr={expr:?} cause={cause}"
            );
        }
    }
}
