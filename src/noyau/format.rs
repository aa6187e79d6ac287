// src/noyau/format.rs
//
// Affichage du résultat : équivalent du "%g" de C.
// - 6 chiffres significatifs
// - zéros finaux retirés
// - forme scientifique si exposant < -4 ou >= précision (1e+06, 2.5e-07)

/// Précision d’affichage par défaut.
pub const CHIFFRES_SIGNIFICATIFS: usize = 6;

/// Format utilisé par l’interface pour afficher un résultat.
pub fn format_resultat(x: f64) -> String {
    format_general(x, CHIFFRES_SIGNIFICATIFS)
}

pub fn format_general(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let p = precision.max(1);

    // l’exposant se lit APRÈS arrondi à p chiffres (999999.5 -> 1e+06)
    let sci = format!("{:.*e}", p - 1, x);
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i32 = exposant.parse().unwrap_or(0);

    if exposant < -4 || exposant >= p as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        format!(
            "{}e{signe}{:02}",
            sans_zeros_finaux(mantisse),
            exposant.unsigned_abs()
        )
    } else {
        let decimales = (p as i32 - 1 - exposant) as usize;
        sans_zeros_finaux(&format!("{x:.decimales$}"))
    }
}

fn sans_zeros_finaux(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
