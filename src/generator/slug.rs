use regex::Regex;
use crate::error::Error;

// Convert a title to a URL-friendly slug: lowercase, collapse runs of
// characters outside [a-z0-9] to a single hyphen, strip edge hyphens.
pub fn slugify(text: &str) -> Result<String, Error> {
    let non_alphanumeric = Regex::new(r"[^a-z0-9]+")
        .map_err(|e| Error::Generation(format!("Invalid regex: {}", e)))?;

    let lowered = text.to_lowercase();
    let hyphenated = non_alphanumeric.replace_all(&lowered, "-");
    Ok(hyphenated.trim_matches('-').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Sunset Over Bay", "sunset-over-bay" ; "spaces become hyphens")]
    #[test_case("Artist's Dream", "artist-s-dream" ; "apostrophe becomes hyphen")]
    #[test_case("THE BULL", "the-bull" ; "uppercase lowered")]
    #[test_case("  Hotel   Series  ", "hotel-series" ; "runs collapse to one hyphen")]
    #[test_case("«π» or the Last Supper", "or-the-last-supper" ; "non ascii stripped at edges")]
    #[test_case("No. 42", "no-42" ; "digits survive")]
    #[test_case("Закат", "" ; "no ascii alphanumerics yields empty slug")]
    fn test_slugify(input: &str, expected: &str) {
        assert_eq!(slugify(input).unwrap(), expected);
    }

    #[test]
    fn test_slug_charset_and_determinism() {
        let slug = slugify("Mixed CASE — with punct!! 123").unwrap();
        assert_eq!(slug, "mixed-case-with-punct-123");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert_eq!(slug, slugify("Mixed CASE — with punct!! 123").unwrap());
    }
}
