//! Country code to mapping table selection.

use super::tables::all_tables;
use super::CountryTable;

/// Select the mapping table for a country code.
///
/// Returns the first table, in registry order, whose stored code is a
/// prefix of `country_code`. Matching is case-sensitive against the
/// uppercase stored codes, and trailing input beyond the stored code is
/// ignored, so `"USA"` selects the US table.
///
/// An empty code or an unmapped country yields `None`. That is a normal
/// state for a radio configured outside the supported domains, not an
/// error.
///
/// # Examples
/// ```rust
/// use halow_chanmap::s1g::select_table;
///
/// assert_eq!(select_table("JP").unwrap().country, "JP");
/// assert!(select_table("").is_none());
/// assert!(select_table("FR").is_none());
/// ```
pub fn select_table(country_code: &str) -> Option<&'static CountryTable> {
    if country_code.is_empty() {
        return None;
    }

    all_tables()
        .iter()
        .find(|table| country_code.starts_with(table.country))
}

/// Country codes with a mapping table, in registry order
pub fn supported_countries() -> Vec<&'static str> {
    all_tables().iter().map(|t| t.country).collect()
}
