//! Locale-aware rendering of account timestamps.
//!
//! TRADE-OFFS
//! ==========
//! The browser build hands any `Date`-parseable string to
//! `Date.prototype.toLocaleDateString` so dates follow the visitor's locale.
//! Native builds, and strings the browser cannot parse, fall back to the ISO
//! date part so output stays deterministic.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

const MISSING: &str = "N/A";

/// `YYYY-MM-DD` prefix of an ISO 8601 timestamp, if it has one.
fn iso_date_part(raw: &str) -> Option<&str> {
    let date = raw.split(['T', ' ']).next()?;
    let mut parts = date.split('-');
    let well_formed = matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(y), Some(m), Some(d), None)
            if y.len() == 4 && m.len() == 2 && d.len() == 2
                && date.chars().all(|c| c.is_ascii_digit() || c == '-')
    );
    well_formed.then_some(date)
}

/// Render an account creation timestamp for display ("Member since").
pub fn format_member_since(created_at: &str) -> String {
    let raw = created_at.trim();
    if raw.is_empty() {
        return MISSING.to_owned();
    }
    #[cfg(feature = "csr")]
    {
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if !parsed.get_time().is_nan() {
            return String::from(parsed.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    iso_date_part(raw).map_or_else(|| MISSING.to_owned(), str::to_owned)
}
