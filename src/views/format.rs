//! Localized rendering of the backend's last-entry timestamps.
//!
//! The backend is not consistent about timestamp text: JSON encoders emit HTTP
//! dates (`Wed, 06 Mar 2024 12:34:56 GMT`), some deployments send RFC 3339, and
//! raw database values look like `2024-03-06 12:34:56`. Naive values are taken
//! as UTC. Anything unparsable is displayed unchanged.

use chrono::{DateTime, FixedOffset, Local, Locale, NaiveDateTime, Utc};

/// Locale date followed by a 24-hour time. `%X` is avoided because several
/// locales define it through `%r`, which chrono does not expand recursively.
const DISPLAY_FORMAT: &str = "%x %H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Clone, Copy, Debug)]
pub struct TimestampFormatter {
    locale: Locale,
    /// `None` renders in the local time zone.
    offset: Option<FixedOffset>,
}

impl TimestampFormatter {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            offset: None,
        }
    }

    /// Renders in a fixed offset instead of the local time zone.
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn format(&self, raw: &str) -> String {
        let Some(instant) = parse_timestamp(raw) else {
            return raw.to_string();
        };

        match self.offset {
            Some(offset) => instant
                .with_timezone(&offset)
                .format_localized(DISPLAY_FORMAT, self.locale)
                .to_string(),
            None => instant
                .with_timezone(&Local)
                .format_localized(DISPLAY_FORMAT, self.locale)
                .to_string(),
        }
    }
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}

/// Parses a locale name such as `en_US` or `de_DE`.
///
/// # Errors
/// Returns a message naming the locale if it is unknown.
pub fn parse_locale(name: &str) -> Result<Locale, String> {
    Locale::try_from(name.trim()).map_err(|_| format!("unknown locale '{}'", name.trim()))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{parse_locale, parse_timestamp, TimestampFormatter};
    use chrono::{FixedOffset, Locale};

    fn utc_formatter(locale: Locale) -> TimestampFormatter {
        TimestampFormatter::new(locale).with_offset(FixedOffset::east_opt(0).unwrap())
    }

    #[test]
    fn parses_every_backend_shape_to_the_same_instant() {
        let expected = parse_timestamp("2024-03-06T12:34:56Z").unwrap();
        for raw in [
            "2024-03-06T12:34:56+00:00",
            "Wed, 06 Mar 2024 12:34:56 GMT",
            "2024-03-06 12:34:56",
            "2024-03-06T12:34:56",
        ] {
            assert_eq!(parse_timestamp(raw), Some(expected), "{raw}");
        }
        assert!(parse_timestamp("2024-03-06 12:34:56.250").is_some());
    }

    #[test]
    fn iso_input_is_not_rendered_raw() {
        let raw = "2024-03-06T12:34:56Z";
        let formatted = utc_formatter(Locale::en_US).format(raw);

        assert_ne!(formatted, raw);
        assert!(formatted.contains("2024"), "{formatted}");
        assert!(formatted.contains("34:56"), "{formatted}");
    }

    #[test]
    fn locale_changes_the_rendering() {
        let raw = "2024-03-06T12:34:56Z";
        let us = utc_formatter(Locale::en_US).format(raw);
        let de = utc_formatter(Locale::de_DE).format(raw);
        assert_ne!(us, de);
    }

    #[test]
    fn offset_is_applied() {
        let raw = "2024-03-06T23:30:00Z";
        let tokyo = TimestampFormatter::new(Locale::de_DE)
            .with_offset(FixedOffset::east_opt(9 * 3600).unwrap())
            .format(raw);
        assert!(tokyo.contains("08:30"), "{tokyo}");
    }

    #[test]
    fn unparsable_values_pass_through() {
        let formatter = TimestampFormatter::default();
        assert_eq!(formatter.format("yesterday-ish"), "yesterday-ish");
        assert_eq!(formatter.format(""), "");
    }

    #[test]
    fn parse_locale_accepts_known_names() {
        assert_eq!(parse_locale(" de_DE ").unwrap(), Locale::de_DE);
        assert!(parse_locale("xx_NOPE").is_err());
    }
}
