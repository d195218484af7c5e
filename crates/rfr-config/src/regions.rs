//! Countries and currencies with published risk-free rate curves.
//!
//! Both tables are in publication order: the euro area first, then the
//! European countries, then the rest of the world.

/// Countries with a published curve.
pub const COUNTRIES: [&str; 53] = [
    "Euro",
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "Iceland",
    "Ireland",
    "Italy",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Norway",
    "Poland",
    "Portugal",
    "Romania",
    "Russia",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
    "Switzerland",
    "United Kingdom",
    "Australia",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Hong Kong",
    "India",
    "Japan",
    "Malaysia",
    "Mexico",
    "New Zealand",
    "Singapore",
    "South Africa",
    "South Korea",
    "Taiwan",
    "Thailand",
    "Turkey",
    "United States",
];

/// Currency codes with a published curve.
///
/// `LIC` is the code used for the Liechtenstein curve, not an ISO 4217 code.
pub const CURRENCIES: [&str; 33] = [
    "EUR", "BGN", "HRK", "CZK", "DKK", "HUF", "LIC", "PLN", "NOK", "RON", "RUB", "SEK", "CHF",
    "GBP", "AUD", "BRL", "CAD", "CLP", "CNY", "COP", "HKD", "INR", "JPY", "MYR", "MXN", "NZD",
    "SGD", "ZAR", "KRW", "TWD", "THB", "TRY", "USD",
];

/// Whether `name` is a country with a published curve (case-insensitive).
pub fn is_known_country(name: &str) -> bool {
    COUNTRIES.iter().any(|c| c.eq_ignore_ascii_case(name.trim()))
}

/// Whether `code` is a currency with a published curve (case-insensitive).
pub fn is_known_currency(code: &str) -> bool {
    CURRENCIES.iter().any(|c| c.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_have_no_duplicates() {
        assert_eq!(COUNTRIES.iter().collect::<HashSet<_>>().len(), COUNTRIES.len());
        assert_eq!(CURRENCIES.iter().collect::<HashSet<_>>().len(), CURRENCIES.len());
    }

    #[test]
    fn test_lookups() {
        assert!(is_known_country("Euro"));
        assert!(is_known_country("united kingdom"));
        assert!(!is_known_country("Atlantis"));

        assert!(is_known_currency("EUR"));
        assert!(is_known_currency("usd"));
        assert!(is_known_currency("LIC"));
        assert!(!is_known_currency("XXX"));
    }
}
