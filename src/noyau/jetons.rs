// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,
    E,

    // Noms de fonction (et seulement ça : pas de variables dans cette calculatrice).
    // NOTE: le parse (RPN->Expr) vérifie que l'identifiant est dans la table fermée.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins unaire. JAMAIS produit par tokenize : injecté par rpn.rs quand
    // un '-' arrive là où aucune valeur n'est attendue ("2*-3", "-x").
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, 7.)
/// - opérateurs + - * / ^ et leurs glyphes boutons × ÷ −
/// - parenthèses ( )
/// - π ou pi, la constante e (sur frontière de mot SEULEMENT)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
/// - √ (équivaut à ident("sqrt"))
///
/// La constante e est un JETON, pas une substitution textuelle : un "e" au
/// milieu d'un identifiant reste dans l'identifiant. C'est ce qui garantit
/// qu'un nom de fonction ne peut jamais être corrompu par la constante.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs (ASCII + glyphes boutons)
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' | '−' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' | '×' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' | '÷' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // π : "π" directement ; "pi" passe par la voie identifiant plus bas
        if c == 'π' {
            out.push(Tok::Pi);
            i += 1;
            continue;
        }

        // Racine carrée unicode : √  => ident("sqrt")
        if c == '√' {
            out.push(Tok::Ident("sqrt".to_string()));
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        // "pi" => Tok::Pi, "e" SEUL => Tok::E (frontière de mot garantie ici,
        // puisque l'on consomme le mot entier avant de décider).
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            match w.as_str() {
                "pi" => out.push(Tok::Pi),
                "e" => out.push(Tok::E),
                _ => out.push(Tok::Ident(w)),
            }
            continue;
        }

        // Nombre décimal : chiffres, point optionnel, chiffres optionnels
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let num_str: String = chars[start..i].iter().collect();
            let v: f64 = num_str
                .parse()
                .map_err(|_| ErreurEval::invalide(format!("nombre invalide: '{num_str}'")))?;

            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::invalide(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (debug/journal) : liste de jetons en texte.
pub fn format_jetons(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Pi => "π".to_string(),
            Tok::E => "e".to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
