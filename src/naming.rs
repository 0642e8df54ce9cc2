//! Type-name normalization for keys and generated accessors.
//!
//! A model type is declared with a CamelCase-ish name ("Login",
//! "CreditCard", "SDP") but looked up through snake_case keys: the singular
//! accessor uses the humanized name ("credit_card") and the plural accessor
//! its pluralized form ("credit_cards"). These helpers implement just enough
//! English inflection for fixture vocabulary; they are not a general
//! inflector.

/// Convert a type name to its snake_case key.
///
/// Handles acronym runs: `"SDP"` → `"sdp"`, `"HTTPLogin"` → `"http_login"`.
pub fn humanize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Pluralize a snake_case key.
pub fn pluralize(key: &str) -> String {
    if let Some(stem) = key.strip_suffix('y') {
        if !stem.is_empty() && !ends_with_vowel(stem) {
            return format!("{stem}ies");
        }
    }
    if key.ends_with('s')
        || key.ends_with('x')
        || key.ends_with('z')
        || key.ends_with("ch")
        || key.ends_with("sh")
    {
        return format!("{key}es");
    }
    format!("{key}s")
}

/// Recover the singular key from a pluralized accessor name.
///
/// Inverse of [`pluralize`] over the same vocabulary; unrecognized inputs
/// are returned unchanged so a caller passing an already-singular name
/// still gets a usable key.
pub fn singularize(key: &str) -> String {
    if let Some(stem) = key.strip_suffix("ies") {
        if !stem.is_empty() && !ends_with_vowel(stem) {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = key.strip_suffix("es") {
        if stem.ends_with('s')
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = key.strip_suffix('s') {
        if !stem.is_empty() && !stem.ends_with('s') {
            return stem.to_string();
        }
    }
    key.to_string()
}

fn ends_with_vowel(s: &str) -> bool {
    matches!(s.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_simple_name() {
        assert_eq!(humanize("Login"), "login");
    }

    #[test]
    fn humanize_camel_case() {
        assert_eq!(humanize("CreditCard"), "credit_card");
        assert_eq!(humanize("FirstNameField"), "first_name_field");
    }

    #[test]
    fn humanize_acronyms() {
        assert_eq!(humanize("SDP"), "sdp");
        assert_eq!(humanize("HTTPLogin"), "http_login");
    }

    #[test]
    fn humanize_passes_snake_case_through() {
        assert_eq!(humanize("credit_card"), "credit_card");
    }

    #[test]
    fn pluralize_regular_nouns() {
        assert_eq!(pluralize("login"), "logins");
        assert_eq!(pluralize("sdp"), "sdps");
    }

    #[test]
    fn pluralize_sibilant_endings() {
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("church"), "churches");
    }

    #[test]
    fn pluralize_consonant_y() {
        assert_eq!(pluralize("company"), "companies");
        // vowel + y stays regular
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn singularize_inverts_pluralize() {
        for key in ["login", "sdp", "address", "box", "company", "day", "user"] {
            assert_eq!(singularize(&pluralize(key)), key, "round trip for {key}");
        }
    }

    #[test]
    fn singularize_leaves_singular_input_alone() {
        assert_eq!(singularize("login"), "login");
        assert_eq!(singularize("address"), "address");
    }
}
