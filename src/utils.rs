// Utility functions
use chrono::{DateTime, TimeZone};
use url::Url;

/// Суффикс имени файла вида `YYYYMMDD_HHMMSS`.
pub fn timestamp_suffix<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// Схлопывает любые пробельные последовательности в один пробел.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Обрезает строку до `max` символов (не байт), без многоточия.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Resolves `raw` against `base`; absolute inputs pass through unchanged.
pub fn resolve_url(base: &Url, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    base.join(raw).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn timestamp_has_fixed_shape() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(timestamp_suffix(&at), "20250307_090501");
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_chars("Дверь NORD", 5), "Дверь");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(collapse_whitespace("  PIANO \n\t ROYAL  "), "PIANO ROYAL");
    }

    #[test]
    fn relative_urls_resolve_against_base() {
        let base = Url::parse("https://labirintdoors.ru/katalog2").unwrap();
        assert_eq!(
            resolve_url(&base, "/upload/nord.jpg").as_deref(),
            Some("https://labirintdoors.ru/upload/nord.jpg")
        );
        assert_eq!(
            resolve_url(&base, "https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(resolve_url(&base, "  "), None);
    }
}
