use crate::error::{RepoUtilsError, Result};
use scraper::{Html, Selector};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub const REDDIT_BASE_URL: &str = "https://reddit.com";

const POST_LINK_SELECTOR: &str = r#"a[href][slot="full-post-link"]"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// Read a saved page from disk and pull out its post links.
pub fn extract_links(path: impl AsRef<Path>) -> Result<Vec<Link>> {
    let path = path.as_ref();
    let html = std::fs::read_to_string(path)?;
    let links = extract_links_from_html(&html)?;
    debug!(path = %path.display(), count = links.len(), "Extracted links");
    Ok(links)
}

/// Every `<a slot="full-post-link" href=...>` in document order.
///
/// The href is appended to [`REDDIT_BASE_URL`] as-is, absolute hrefs included.
pub fn extract_links_from_html(html: &str) -> Result<Vec<Link>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(POST_LINK_SELECTOR)
        .map_err(|e| RepoUtilsError::SelectorError(e.to_string()))?;

    let links = document
        .select(&selector)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            let text = element.text().map(str::trim).collect::<String>();
            Some(Link {
                text: text.trim().to_string(),
                url: format!("{}{}", REDDIT_BASE_URL, href),
            })
        })
        .collect();

    Ok(links)
}

/// Header row then one `text\turl` row per link.
pub fn write_tsv<W: Write>(links: &[Link], out: &mut W) -> Result<()> {
    writeln!(out, "name\tlink")?;
    for link in links {
        writeln!(out, "{}\t{}", link.text, link.url)?;
    }
    Ok(())
}
