use crate::HarvestError;
use crate::extract::{container_selector, extract_links};
use crate::report::SkipReason;

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_container_selector() {
        assert_eq!(container_selector("product-card"), "[id^=\"product-card\"]");
        assert_eq!(container_selector("tile-"), "[id^=\"tile-\"]");
    }

    #[test]
    fn test_single_container_single_anchor() {
        let html = r#"
            <div id="product-card-1"><a href="https://shop.example/p/1">One</a></div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        assert_eq!(extraction.links, vec!["https://shop.example/p/1"]);
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_first_anchor_wins() {
        let html = r#"
            <div id="product-card-1">
                <a href="https://shop.example/p/1">Detail</a>
                <a href="https://shop.example/wishlist/1">Wishlist</a>
            </div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        assert_eq!(extraction.links, vec!["https://shop.example/p/1"]);
    }

    #[test]
    fn test_no_anchor_is_skipped_not_fatal() {
        let html = r#"
            <div id="product-card-1"><span>Out of stock</span></div>
            <div id="product-card-2"><a href="https://shop.example/p/2">Two</a></div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        assert_eq!(extraction.links, vec!["https://shop.example/p/2"]);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].container_id, "product-card-1");
        assert_eq!(extraction.skipped[0].reason, SkipReason::NoAnchor);
    }

    #[test]
    fn test_missing_href_is_skipped() {
        let html = r#"
            <div id="product-card-1"><a name="placeholder">One</a></div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        assert!(extraction.links.is_empty());
        assert_eq!(extraction.skipped[0].reason, SkipReason::MissingHref);
    }

    #[test]
    fn test_empty_href_is_excluded() {
        let html = r#"
            <div id="product-card-1"><a href="">One</a></div>
            <div id="product-card-2"><a href="https://shop.example/p/2">Two</a></div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        assert_eq!(extraction.links, vec!["https://shop.example/p/2"]);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].reason, SkipReason::EmptyHref);
    }

    #[test]
    fn test_dedup_is_exact_and_case_sensitive() {
        let html = r#"
            <div id="product-card-1"><a href="https://shop.example/p/1">One</a></div>
            <div id="product-card-2"><a href="https://shop.example/P/1">One upper</a></div>
            <div id="product-card-3"><a href="https://shop.example/p/1">One again</a></div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        // Differing case survives, the exact duplicate does not
        assert_eq!(
            extraction.links,
            vec!["https://shop.example/p/1", "https://shop.example/P/1"]
        );
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_non_matching_ids_are_ignored() {
        let html = r#"
            <div id="banner-1"><a href="https://shop.example/sale">Sale</a></div>
            <div id="product-card-1"><a href="https://shop.example/p/1">One</a></div>
            <div class="product-card"><a href="https://shop.example/p/2">No id</a></div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        assert_eq!(extraction.links, vec!["https://shop.example/p/1"]);
    }

    #[test]
    fn test_empty_document() {
        let extraction = extract_links("<html><body></body></html>", "product-card").unwrap();
        assert!(extraction.links.is_empty());
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_invalid_prefix_is_a_selector_error() {
        let result = extract_links("<div></div>", "product\"card");
        assert!(matches!(result, Err(HarvestError::Selector { .. })));
    }

    #[test]
    fn test_relative_hrefs_are_kept_verbatim() {
        let html = r#"
            <div id="product-card-1"><a href="/p/1">One</a></div>
        "#;
        let extraction = extract_links(html, "product-card").unwrap();
        assert_eq!(extraction.links, vec!["/p/1"]);
    }
}
