/// Selector used to recognise in-page links.
pub const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Returns the fragment selector for an in-page href.
///
/// A bare `#` names no element, so it yields `None` rather than an invalid
/// selector.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Absolute scroll position for the element matched by `href`, leaving
/// `clearance` pixels for the fixed navigation.
///
/// `target_top` resolves a selector to the element's viewport-relative top
/// edge; it returns `None` when nothing matches.
pub fn scroll_destination(
    href: &str,
    page_offset: f64,
    clearance: f64,
    target_top: impl FnOnce(&str) -> Option<f64>,
) -> Option<f64> {
    let selector = fragment_selector(href)?;
    let top = target_top(selector)?;
    Some(top + page_offset - clearance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_subtracts_nav_clearance() {
        let destination = scroll_destination("#projects", 200.0, 80.0, |selector| {
            assert_eq!(selector, "#projects");
            Some(640.0)
        });
        assert_eq!(destination, Some(760.0));
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let destination = scroll_destination("#nowhere", 200.0, 80.0, |_| None);
        assert_eq!(destination, None);
    }

    #[test]
    fn bare_hash_never_queries_the_document() {
        let destination = scroll_destination("#", 0.0, 80.0, |_| {
            panic!("bare hash should not be resolved");
        });
        assert_eq!(destination, None);
    }

    #[test]
    fn non_fragment_hrefs_are_ignored() {
        assert_eq!(fragment_selector("https://example.com/#top"), None);
        assert_eq!(fragment_selector(" #about "), Some("#about"));
    }
}
