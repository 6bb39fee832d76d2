//! Slug derivation from product names

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, transliterates Spanish accented characters, and replaces
/// runs of anything non-alphanumeric with a single hyphen. Leading and
/// trailing hyphens are trimmed.
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().map(transliterate) {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Map accented characters onto their ASCII base letter.
fn transliterate(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'Á' | 'À' | 'Ä' | 'Â' => 'A',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'Ñ' => 'N',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_derivation() {
        assert_eq!(generate_slug("Zafiro 24cm"), "zafiro-24cm");
        assert_eq!(generate_slug("Imperial 23"), "imperial-23");
        assert_eq!(generate_slug("Dream Box MF"), "dream-box-mf");
    }

    #[test]
    fn test_accents_transliterated() {
        assert_eq!(generate_slug("Almohada Chaide Rubí"), "almohada-chaide-rubi");
        assert_eq!(generate_slug("Prensado Clínico"), "prensado-clinico");
        assert_eq!(generate_slug("Ñandú"), "nandu");
    }

    #[test]
    fn test_symbol_runs_collapse() {
        assert_eq!(generate_slug("1 ½ Plaza"), "1-plaza");
        assert_eq!(generate_slug("--Hello,   World!--"), "hello-world");
        assert_eq!(generate_slug("   "), "");
    }
}
