//! Casing restoration for lemmas
//!
//! Forms are lowercased before rule lookup, so proper nouns,
//! abbreviations and foreign words need their capitalization
//! reconstructed from the original form. Hyphenated compounds are
//! recased segment by segment so that pieces like `DNA-` or `Vestur-`
//! keep their own casing:
//!
//! - `(DNA-þræðinum, nþeþg)` → `dna-þráður` → `DNA-þráður`
//! - `(Vestur-Íslendingum, nkfþ-s)` → `vestur-íslendingur` → `Vestur-Íslendingur`
//! - `(Stoke-on-Trent, e)` → `stoke-on-trent` → `Stoke-on-Trent`

/// Whether every cased character is uppercase and at least one exists.
pub fn is_all_uppercase(s: &str) -> bool {
    !s.chars().any(char::is_lowercase) && s.chars().any(char::is_uppercase)
}

/// Whether the first character is uppercase and no later character is.
pub fn is_title_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && !chars.any(char::is_uppercase),
        None => false,
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn to_title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Whether a hyphen occurs strictly inside the form, excluding the
/// first and last character.
fn has_interior_hyphen(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str().contains('-')
}

/// Carry one original segment's casing over to its lemma segment.
fn recase_segment(fpart: &str, lpart: &str) -> String {
    if fpart.to_lowercase() == lpart.to_lowercase() {
        // Segment was not transformed by lemmatization; keep it verbatim.
        fpart.to_string()
    } else if is_all_uppercase(fpart) {
        lpart.to_uppercase()
    } else if is_title_case(fpart) {
        to_title_case(lpart)
    } else {
        lpart.to_lowercase()
    }
}

/// Reconstruct the casing of `lemma` from the original `form`.
///
/// `proper` is the tag classification from
/// [`TagLexicon::is_proper`](crate::TagLexicon::is_proper). `lemma` is
/// the lowercase lemma from rule application, or the form itself on
/// the identity fallback paths.
pub fn recase(form: &str, proper: bool, lemma: &str) -> String {
    if has_interior_hyphen(form) {
        let fparts: Vec<&str> = form.split('-').collect();
        let lparts: Vec<&str> = lemma.split('-').collect();

        if fparts.len() != lparts.len() {
            // A rule changed the segment count; per-segment alignment
            // is meaningless, so recase the lemma as a whole word.
            log::warn!(
                "Hyphen segment count mismatch: ({:?}, {:?})",
                form,
                lemma
            );
        } else {
            let mut segments: Vec<String> = fparts
                .iter()
                .zip(&lparts)
                .map(|(f, l)| recase_segment(f, l))
                .collect();

            if proper && !is_all_uppercase(&segments[0]) {
                segments[0] = to_title_case(&segments[0]);
            }

            return segments.join("-");
        }
    }

    // Proper nouns: capitalize the lemma, even when the form was
    // written in full uppercase.
    //   (Halldórs, nken-s)  → halldór → Halldór
    //   (HALLDÓRS, nken-s)  → halldór → Halldór
    if proper {
        return to_title_case(lemma);
    }

    lemma.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_uppercase_needs_a_cased_char() {
        assert!(is_all_uppercase("DNA"));
        assert!(is_all_uppercase("HALLDÓRS"));
        assert!(!is_all_uppercase("Dna"));
        assert!(!is_all_uppercase("123"));
        assert!(!is_all_uppercase(""));
    }

    #[test]
    fn title_case_checks_first_char_only_uppercase() {
        assert!(is_title_case("Vestur"));
        assert!(is_title_case("Þráður"));
        assert!(!is_title_case("vestur"));
        assert!(!is_title_case("VESTUR"));
        assert!(!is_title_case(""));
    }

    #[test]
    fn to_title_case_handles_icelandic_letters() {
        assert_eq!(to_title_case("íslendingur"), "Íslendingur");
        assert_eq!(to_title_case("HALLDÓR"), "Halldór");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn plain_word_stays_lowercase() {
        assert_eq!(recase("Hestinum", false, "hestur"), "hestur");
    }

    #[test]
    fn proper_noun_is_title_cased() {
        assert_eq!(recase("Halldórs", true, "halldór"), "Halldór");
        assert_eq!(recase("HALLDÓRS", true, "halldór"), "Halldór");
    }

    #[test]
    fn untransformed_hyphen_segment_kept_verbatim() {
        assert_eq!(recase("DNA-þræðinum", true, "dna-þráður"), "DNA-þráður");
    }

    #[test]
    fn each_hyphen_segment_recased_independently() {
        assert_eq!(
            recase("Vestur-Íslendingum", true, "vestur-íslendingur"),
            "Vestur-Íslendingur"
        );
    }

    #[test]
    fn untransformed_compound_keeps_original_casing() {
        assert_eq!(recase("Stoke-on-Trent", false, "stoke-on-trent"), "Stoke-on-Trent");
    }

    #[test]
    fn proper_compound_first_segment_gets_capitalized() {
        assert_eq!(recase("vestur-íslendingum", true, "vestur-íslendingur"), "Vestur-íslendingur");
    }

    #[test]
    fn leading_or_trailing_hyphen_is_not_a_compound() {
        assert_eq!(recase("-hestur", false, "-hestur"), "-hestur");
        assert_eq!(recase("Vestur-", true, "Vestur-"), "Vestur-");
    }

    #[test]
    fn segment_count_mismatch_falls_back_to_whole_word() {
        assert_eq!(recase("Austur-Evrópu", true, "evrópa"), "Evrópa");
        assert_eq!(recase("til-dæmis", false, "dæmi"), "dæmi");
    }
}
