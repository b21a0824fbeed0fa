//! Key normalization shared by every lookup
//!
//! All four tables are keyed on normalized text: cities in lowercase,
//! currency codes in uppercase. Output echoes the caller's input in title
//! case, matching how city names are displayed.

/// Normalize a city name into a table key
///
/// # Examples
///
/// ```
/// use travel_assistant::travel::normalize::city_key;
///
/// assert_eq!(city_key("New York"), "new york");
/// ```
pub fn city_key(city: &str) -> String {
    city.to_lowercase()
}

/// Normalize a currency code into a table key
///
/// # Examples
///
/// ```
/// use travel_assistant::travel::normalize::currency_key;
///
/// assert_eq!(currency_key("mxn"), "MXN");
/// ```
pub fn currency_key(code: &str) -> String {
    code.to_uppercase()
}

/// Title-case free text for display
///
/// A letter is upper-cased when it follows a non-letter (or starts the
/// string) and lower-cased otherwise, so `"nEW yORK"` becomes `"New York"`
/// and `"saint-malo"` becomes `"Saint-Malo"`. Whitespace is kept as given.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }

    out
}
