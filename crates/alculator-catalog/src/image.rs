//! Product image and supplier page URLs.
//!
//! Image URLs are derived from the stock code. Some codes are published with
//! underscores where the image host expects hyphens, so a consumer that fails
//! to load the primary URL tries the fallback once before giving up on a
//! placeholder.

/// Image host path prefix.
const IMAGE_BASE: &str = "https://media.danmurphys.com.au/dmo/product";

/// Supplier product page prefix.
const SUPPLIER_BASE: &str = "https://www.danmurphys.com.au/product";

/// Vendor prefix stripped from stock codes before building image URLs.
const VENDOR_PREFIX: &str = "ER_";

/// Inline image shown when neither URL loads.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='120' height='160' viewBox='0 0 120 160'>\
<rect width='120' height='160' fill='%23eeeeee'/>\
<text x='60' y='85' font-size='14' text-anchor='middle' fill='%23999999'>No image</text></svg>";

fn image_code(stockcode: &str) -> &str {
    stockcode.strip_prefix(VENDOR_PREFIX).unwrap_or(stockcode)
}

/// Returns the primary image URL, or `None` for an empty stock code.
pub fn primary_image_url(stockcode: &str) -> Option<String> {
    if stockcode.is_empty() {
        return None;
    }
    Some(format!("{IMAGE_BASE}/{}-1.png", image_code(stockcode)))
}

/// Returns the fallback image URL (underscores replaced by hyphens).
pub fn fallback_image_url(stockcode: &str) -> Option<String> {
    if stockcode.is_empty() {
        return None;
    }
    let code = image_code(stockcode).replace('_', "-");
    Some(format!("{IMAGE_BASE}/{code}-1.png"))
}

/// Returns the supplier product page for a stock code.
pub fn supplier_url(stockcode: &str) -> Option<String> {
    if stockcode.is_empty() {
        return None;
    }
    Some(format!("{SUPPLIER_BASE}/{stockcode}"))
}

/// Where a consumer currently loads a product image from.
///
/// Each load failure advances the source one step; the placeholder is
/// terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Primary(String),
    Fallback(String),
    Placeholder,
}

impl ImageSource {
    /// Starts at the primary URL for a stock code.
    pub fn for_stockcode(stockcode: &str) -> Self {
        match primary_image_url(stockcode) {
            Some(url) => ImageSource::Primary(url),
            None => ImageSource::Placeholder,
        }
    }

    /// Returns the URL to load.
    pub fn url(&self) -> &str {
        match self {
            ImageSource::Primary(url) | ImageSource::Fallback(url) => url,
            ImageSource::Placeholder => PLACEHOLDER_IMAGE,
        }
    }

    /// Advances after a load failure.
    ///
    /// The fallback is skipped when it would request the same URL again.
    pub fn next(self, stockcode: &str) -> Self {
        match self {
            ImageSource::Primary(current) => match fallback_image_url(stockcode) {
                Some(fallback) if fallback != current => ImageSource::Fallback(fallback),
                _ => ImageSource::Placeholder,
            },
            ImageSource::Fallback(_) | ImageSource::Placeholder => ImageSource::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_strips_vendor_prefix() {
        assert_eq!(
            primary_image_url("ER_1000009_CASE").unwrap(),
            "https://media.danmurphys.com.au/dmo/product/1000009_CASE-1.png"
        );
        assert_eq!(
            primary_image_url("123456").unwrap(),
            "https://media.danmurphys.com.au/dmo/product/123456-1.png"
        );
    }

    #[test]
    fn test_fallback_replaces_underscores() {
        assert_eq!(
            fallback_image_url("ER_1000009_CASE").unwrap(),
            "https://media.danmurphys.com.au/dmo/product/1000009-CASE-1.png"
        );
    }

    #[test]
    fn test_empty_stockcode() {
        assert!(primary_image_url("").is_none());
        assert!(fallback_image_url("").is_none());
        assert!(supplier_url("").is_none());
        assert_eq!(ImageSource::for_stockcode(""), ImageSource::Placeholder);
    }

    #[test]
    fn test_supplier_url_keeps_full_code() {
        assert_eq!(
            supplier_url("ER_1000009_CASE").unwrap(),
            "https://www.danmurphys.com.au/product/ER_1000009_CASE"
        );
    }

    #[test]
    fn test_image_source_swaps_once_then_placeholder() {
        let code = "ER_1_PACK";
        let source = ImageSource::for_stockcode(code);
        assert!(matches!(source, ImageSource::Primary(_)));

        let source = source.next(code);
        assert_eq!(source.url(), "https://media.danmurphys.com.au/dmo/product/1-PACK-1.png");

        let source = source.next(code);
        assert_eq!(source, ImageSource::Placeholder);
        assert_eq!(source.url(), PLACEHOLDER_IMAGE);
        assert_eq!(source.next(code), ImageSource::Placeholder);
    }

    #[test]
    fn test_image_source_skips_identical_fallback() {
        let source = ImageSource::for_stockcode("123456").next("123456");
        assert_eq!(source, ImageSource::Placeholder);
    }
}
