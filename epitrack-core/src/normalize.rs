//! Canonical region names.
//!
//! Both upstream sources spell countries differently (`US` vs `United
//! States`, `Korea, South` vs `S. Korea`). Every ingested name goes through
//! [`normalize_country`] so the two sources meet on one identity.

use deunicode::deunicode;

/// Alias → canonical name.
const ALIASES: &[(&str, &str)] = &[
    ("Mainland China", "China"),
    ("US", "USA"),
    ("United States", "USA"),
    ("United Kingdom", "UK"),
    ("England", "UK"),
    ("Others", "Diamond Princess"),
    ("Cruise Ship", "Diamond Princess"),
    ("Czechia", "Czech Republic"),
    ("United Arab Emirates", "UAE"),
    ("Iran (Islamic Republic of)", "Iran"),
    ("Hong Kong SAR", "Hong Kong"),
    ("Viet Nam", "Vietnam"),
    ("occupied Palestinian territory", "Palestine"),
    ("Macao SAR", "Macao"),
    ("Russian Federation", "Russia"),
    ("Republic of Moldova", "Moldova"),
    ("Macedonia", "North Macedonia"),
    ("Republic of Serbia", "Serbia"),
    ("Saint Vincent and the Grenadines", "St. Vincent Grenadines"),
    ("Ivory Coast", "Cote d'Ivoire"),
    ("Saint Barthelemy", "St. Barth"),
    ("Faroe Islands", "Faeroe Islands"),
    ("Runion", "Reunion"),
    ("The Gambia", "Gambia"),
    ("Gambia, The", "Gambia"),
    ("Central African Republic", "CAR"),
    ("Curaao", "Curacao"),
    ("Jersey", "Channel Islands"),
    ("Guernsey", "Channel Islands"),
    ("East Timor", "Timor-Leste"),
    ("Republic of Korea", "South Korea"),
    ("S. Korea", "South Korea"),
    ("Korea, South", "South Korea"),
    ("United Republic of Tanzania", "Tanzania"),
    ("Holy See", "Vatican City"),
    ("Vatican", "Vatican City"),
    ("Holy See (Vatican City State)", "Vatican City"),
    ("Taiwan*", "Taiwan"),
    ("Taipei and environs", "Taiwan"),
    ("Democratic Republic of Congo", "Congo"),
    ("Democratic Republic of the Congo", "Congo"),
    ("The Democratic Republic of Congo", "Congo"),
    ("Congo (Kinshasa)", "Congo"),
    ("DRC", "Congo"),
    ("The Bahamas", "Bahamas"),
    ("Bahamas, The", "Bahamas"),
];

fn alias(name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}

fn canonical(name: &str) -> Option<&'static str> {
    ALIASES.iter().find(|(_, to)| *to == name).map(|(_, to)| *to)
}

/// Map a raw region label from either source onto its canonical name.
///
/// Lookup order: the alias table, then the ASCII-folded form of the label
/// (`Curaçao` → `Curacao`, `Réunion` → `Reunion`) as alias or canonical name.
/// Unknown labels come back unchanged, including their diacritics.
#[must_use]
pub fn normalize_country(raw: &str) -> &str {
    if let Some(hit) = alias(raw) {
        return hit;
    }
    if raw.is_ascii() {
        return raw;
    }
    let folded = deunicode(raw);
    alias(&folded).or_else(|| canonical(&folded)).unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases() {
        assert_eq!(normalize_country("US"), "USA");
        assert_eq!(normalize_country("Czechia"), "Czech Republic");
        assert_eq!(normalize_country("Korea, South"), "South Korea");
        assert_eq!(normalize_country("S. Korea"), "South Korea");
        assert_eq!(normalize_country("Congo (Kinshasa)"), "Congo");
        assert_eq!(normalize_country("DRC"), "Congo");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(normalize_country("Freedonia"), "Freedonia");
        assert_eq!(normalize_country(""), "");
        assert_eq!(normalize_country("Congo (Brazzaville)"), "Congo (Brazzaville)");
    }

    #[test]
    fn diacritics_fold_onto_canonical_names() {
        assert_eq!(normalize_country("Curaçao"), "Curacao");
        assert_eq!(normalize_country("Réunion"), "Reunion");
        assert_eq!(normalize_country("Côte d'Ivoire"), "Cote d'Ivoire");
        assert_eq!(normalize_country("São Tomé"), "São Tomé");
    }

    #[test]
    fn canonical_names_are_fixed_points() {
        for (_, to) in ALIASES {
            assert_eq!(normalize_country(to), *to, "{to} must normalize to itself");
        }
    }
}
