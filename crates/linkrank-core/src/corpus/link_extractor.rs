//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Raw `href` values of every `<a ... href="...">` tag, in document order
pub fn extract_links(content: &str) -> Vec<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Resolve an `href` found in `source_path` to a corpus-relative page identifier.
///
/// External URLs, `mailto:` links and bare fragments resolve to nothing. A fragment suffix is
/// dropped. Relative targets are joined to the source page's directory.
pub fn resolve_link(href: &str, source_path: &str) -> Option<String> {
    if href.is_empty()
        || href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("mailto:")
        || href.starts_with('#')
    {
        return None;
    }

    let target = href.split('#').next().unwrap_or(href);
    let source_dir = Path::new(source_path).parent().unwrap_or(Path::new(""));

    let target_path = Path::new(target);
    let resolved = if target_path.is_relative() {
        source_dir.join(target_path)
    } else {
        target_path.to_path_buf()
    };

    let normalized = normalize_pathbuf(&resolved);
    if normalized.as_os_str().is_empty() {
        return None;
    }

    Some(normalized.to_string_lossy().to_string())
}

fn normalize_pathbuf(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            _ => components.push(component.as_os_str()),
        }
    }

    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_anchor_links() {
        let content = r#"<p>See <a href="2.html">two</a> and <a class="x" href="3.html">three</a>.</p>
<a href="2.html">again</a><link href="style.css">"#;
        let links = extract_links(content);

        assert_eq!(links, vec!["2.html", "3.html", "2.html"]);
    }

    #[test]
    fn test_single_quoted_href_ignored() {
        let links = extract_links("<a href='2.html'>two</a>");
        assert!(links.is_empty());
    }

    #[test]
    fn test_resolve_relative_links() {
        assert_eq!(resolve_link("2.html", "1.html").as_deref(), Some("2.html"));
        assert_eq!(resolve_link("./2.html", "1.html").as_deref(), Some("2.html"));
        assert_eq!(
            resolve_link("../index.html", "docs/guide.html").as_deref(),
            Some("index.html")
        );
        assert_eq!(
            resolve_link("api.html#section", "docs/guide.html").as_deref(),
            Some("docs/api.html")
        );
    }

    #[test]
    fn test_resolve_skips_external_and_fragments() {
        assert_eq!(resolve_link("https://example.com/a.html", "1.html"), None);
        assert_eq!(resolve_link("http://example.com", "1.html"), None);
        assert_eq!(resolve_link("mailto:me@example.com", "1.html"), None);
        assert_eq!(resolve_link("#top", "1.html"), None);
        assert_eq!(resolve_link("", "1.html"), None);
    }
}
