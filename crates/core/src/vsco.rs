//! Helpers for VSCO photo links (`https://vsco.co/<user>/image/<id>`).
//!
//! Gallery entries are stored as VSCO page links; these functions pull the
//! image id out of such a link and build the CDN address for it.

const VSCO_HOST: &str = "vsco.co";
const IMAGE_SEGMENT: &str = "image";

/// Extract the image id from a link like `https://vsco.co/<user>/image/<id>`.
///
/// Returns `None` when the link does not parse, is not on a VSCO host, or has
/// no segment after `image`.
pub fn extract_image_id(link: &str) -> Option<String> {
    let parsed = url::Url::parse(link).ok()?;
    if !parsed.host_str()?.contains(VSCO_HOST) {
        return None;
    }

    let mut segments = parsed.path_segments()?;
    segments.find(|s| *s == IMAGE_SEGMENT)?;
    segments
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Direct CDN address for a VSCO image id.
pub fn image_url(image_id: &str) -> Option<String> {
    if image_id.is_empty() {
        return None;
    }
    Some(format!("https://image-aws-us-west-2.{VSCO_HOST}/{image_id}/image.jpg"))
}

pub fn is_valid_link(link: &str) -> bool {
    extract_image_id(link).is_some()
}
