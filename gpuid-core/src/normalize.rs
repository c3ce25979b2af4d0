use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::folding::fold;
use crate::profile::PlaceType;
use crate::stopwords::StopWords;

/// Ordered, folded, stopword-filtered words of a place name.
pub type Tokens = SmallVec<[String; 8]>;

fn removed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[()./]").expect("valid regex"))
}

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \-']+").expect("valid regex"))
}

/// The part of the name that identifies a place of this type.
pub fn significant_name(name: &str, place_type: PlaceType) -> String {
    match place_type {
        PlaceType::Cluster => name.split(',').next().unwrap_or_default().to_string(),
        PlaceType::Group => name.replace(',', " "),
    }
}

/// Folds, lowercases and strips punctuation, leaving words separated by single spaces.
pub fn sanitize(s: &str) -> String {
    let lower = fold(s).to_lowercase();
    let stripped = removed_chars().replace_all(&lower, "");
    separators().replace_all(&stripped, " ").into_owned()
}

pub fn tokenize(name: &str, place_type: PlaceType, country_code: &str) -> Tokens {
    let stop_words = StopWords::for_country(country_code);
    sanitize(&significant_name(name, place_type))
        .split(' ')
        .filter(|w| !w.is_empty() && !stop_words.contains(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(name: &str, place_type: PlaceType, cc: &str) -> Vec<String> {
        tokenize(name, place_type, cc).into_vec()
    }

    #[test]
    fn cluster_keeps_text_before_first_comma() {
        assert_eq!(
            significant_name("Paris, Île-de-France, France", PlaceType::Cluster),
            "Paris"
        );
        assert_eq!(significant_name("Cesenatico", PlaceType::Cluster), "Cesenatico");
        assert_eq!(significant_name(", Nowhere", PlaceType::Cluster), "");
    }

    #[test]
    fn group_keeps_every_part() {
        assert_eq!(
            significant_name("Gare, Nord,Est", PlaceType::Group),
            "Gare  Nord Est"
        );
    }

    #[test]
    fn sanitize_strips_and_collapses() {
        assert_eq!(sanitize("St. Jean (Nord)/Sud"), "st jean nordsud");
        assert_eq!(sanitize("Paris - Gare De Lyon"), "paris gare de lyon");
        assert_eq!(sanitize("Pont-de-l'Arche"), "pont de l arche");
        assert_eq!(sanitize("  Île--Œuvre  "), " ile oeuvre ");
    }

    #[test]
    fn removes_locale_stopwords() {
        assert_eq!(
            words("Paris - Gare De Lyon", PlaceType::Group, "fr"),
            ["paris", "gare", "lyon"]
        );
        assert_eq!(
            words("Pont-de-l'Arche", PlaceType::Group, "FR"),
            ["pont", "arche"]
        );
        assert_eq!(
            words("Bassano del Grappa, Veneto, Italia", PlaceType::Cluster, "it"),
            ["bassano", "grappa"]
        );
        assert_eq!(
            words("Isle of the Dead", PlaceType::Group, "us"),
            ["isle", "dead"]
        );
    }

    #[test]
    fn belgium_reads_french() {
        let name = "Rue de la Loi, Bruxelles";
        for place_type in [PlaceType::Cluster, PlaceType::Group] {
            assert_eq!(
                words(name, place_type, "be"),
                words(name, place_type, "fr")
            );
        }
        assert_eq!(words(name, PlaceType::Group, "be"), ["rue", "loi", "bruxelles"]);
    }

    #[test]
    fn empty_and_stopword_only_names_have_no_tokens() {
        assert!(tokenize("", PlaceType::Cluster, "fr").is_empty());
        assert!(tokenize(" - ", PlaceType::Group, "fr").is_empty());
        assert!(tokenize("de la", PlaceType::Group, "fr").is_empty());
    }

    #[test]
    fn unknown_characters_survive() {
        assert_eq!(
            words("B\\u00fcsum, Schleswig-Holstein", PlaceType::Cluster, "de"),
            ["b\\u00fcsum"]
        );
        assert_eq!(words("Großer Markt", PlaceType::Group, "de"), ["großer", "markt"]);
    }
}
