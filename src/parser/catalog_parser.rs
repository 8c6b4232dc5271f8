// Catalog-page HTML parsing
use crate::config::AppConfig;
use crate::model::{ParserError, RawCandidate};
use crate::utils::collapse_whitespace;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const IMAGE_ATTRS: [&str; 5] = ["src", "data-src", "data-lazy-src", "data-original", "data-lazy"];
const SKIPPED_IMAGE_MARKERS: [&str; 3] = ["icon", "logo", "placeholder"];

pub trait Parser {
    fn parse(&self, html: &str) -> Result<Vec<RawCandidate>, ParserError>;
}

pub struct CatalogParser {
    item_selector: Selector,
    img_selector: Selector,
    min_text_chars: usize,
    link_keywords: Vec<String>,
}

impl CatalogParser {
    pub fn new(config: &AppConfig) -> Result<Self, ParserError> {
        let item_selector =
            Selector::parse(&config.selector).map_err(|e| ParserError::HtmlParseError(e.to_string()))?;
        let img_selector = Selector::parse("img").map_err(|e| ParserError::HtmlParseError(e.to_string()))?;

        Ok(Self {
            item_selector,
            img_selector,
            min_text_chars: config.min_text_chars,
            link_keywords: config.link_keywords.iter().map(|k| k.to_lowercase()).collect(),
        })
    }

    fn is_relevant(&self, text: &str) -> bool {
        if text.chars().count() < self.min_text_chars {
            return false;
        }
        if self.link_keywords.is_empty() {
            return true;
        }
        let lower = text.to_lowercase();
        self.link_keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    fn image_src(&self, element: &ElementRef) -> Option<String> {
        let img = element.select(&self.img_selector).next()?;
        let src = IMAGE_ATTRS
            .iter()
            .filter_map(|attr| img.value().attr(attr))
            .map(str::trim)
            // lazy-load markup keeps an inline `data:` stub in `src`
            .find(|v| !v.is_empty() && !v.starts_with("data:"))?;

        let lower = src.to_lowercase();
        if SKIPPED_IMAGE_MARKERS.iter().any(|m| lower.contains(m)) {
            debug!("Ignoring decorative image {}", src);
            return None;
        }
        Some(src.to_string())
    }
}

impl Parser for CatalogParser {
    fn parse(&self, html: &str) -> Result<Vec<RawCandidate>, ParserError> {
        let document = Html::parse_document(html);
        let mut candidates = Vec::new();

        for element in document.select(&self.item_selector) {
            let text = collapse_whitespace(&element.text().collect::<String>());
            if !self.is_relevant(&text) {
                continue;
            }

            candidates.push(RawCandidate {
                text,
                href: element.value().attr("href").map(|h| h.trim().to_string()),
                image_src: self.image_src(&element),
            });
        }

        debug!("Parsed {} candidates", candidates.len());
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CatalogParser {
        CatalogParser::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn extracts_text_href_and_image() {
        let html = r#"
            <html><body>
              <a href="/katalog2/nord/" class="product-sections-01-item">
                <img data-src="/upload/nord.jpg">
                <span>Входная дверь Лабиринт</span> <b>NORD</b>, от 52 000 руб
              </a>
            </body></html>"#;

        let out = parser().parse(html).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "Входная дверь Лабиринт NORD, от 52 000 руб");
        assert_eq!(out[0].href.as_deref(), Some("/katalog2/nord/"));
        assert_eq!(out[0].image_src.as_deref(), Some("/upload/nord.jpg"));
    }

    #[test]
    fn short_or_irrelevant_links_are_dropped() {
        let html = r#"
            <a href="/">Главная</a>
            <a href="/contacts">Контакты и адреса салонов</a>
            <a href="/k/piano">PIANO ROYAL от 61000 руб</a>"#;

        let out = parser().parse(html).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "PIANO ROYAL от 61000 руб");
        assert_eq!(out[0].image_src, None);
    }

    #[test]
    fn decorative_images_are_ignored() {
        let html = r#"<a href="/k/storm"><img src="/img/logo.png">Входная дверь STORM</a>"#;
        let out = parser().parse(html).unwrap();
        assert_eq!(out[0].image_src, None);
    }

    #[test]
    fn empty_src_falls_through_to_lazy_attrs() {
        let html = r#"<a href="/k/storm"><img src="" data-original="/up/storm.jpg">Входная дверь STORM</a>"#;
        let out = parser().parse(html).unwrap();
        assert_eq!(out[0].image_src.as_deref(), Some("/up/storm.jpg"));
    }

    #[test]
    fn inline_data_stub_is_skipped_for_lazy_source() {
        let html = r#"<a href="/k/nord"><img src="data:image/gif;base64,R0lGOD" data-src="/up/nord.jpg">Входная дверь NORD</a>"#;
        let out = parser().parse(html).unwrap();
        assert_eq!(out[0].image_src.as_deref(), Some("/up/nord.jpg"));
    }

    #[test]
    fn inline_data_stub_alone_means_no_image() {
        let html = r#"<a href="/k/nord"><img src="data:image/gif;base64,R0lGOD">Входная дверь NORD</a>"#;
        let out = parser().parse(html).unwrap();
        assert_eq!(out[0].image_src, None);
    }

    #[test]
    fn invalid_selector_is_reported() {
        let cfg = AppConfig { selector: "a[[".into(), ..AppConfig::default() };
        assert!(matches!(CatalogParser::new(&cfg), Err(ParserError::HtmlParseError(_))));
    }
}
