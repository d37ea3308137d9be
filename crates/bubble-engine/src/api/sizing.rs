//! Bubble size hints: the board's likes-based sizing rule and the lenient
//! parsing of `"140px"`-style diameters handed in with each element.

/// Viewports narrower than this get the small base size.
pub const MOBILE_BREAKPOINT: f32 = 768.0;
pub const MOBILE_BASE_DIAMETER: f32 = 80.0;
pub const DESKTOP_BASE_DIAMETER: f32 = 140.0;
/// Each like grows a bubble by this many px, up to `MAX_LIKES_GROWTH`.
pub const PX_PER_LIKE: f32 = 5.0;
pub const MAX_LIKES_GROWTH: f32 = 100.0;

/// Diameter (px) of a confession bubble with `likes` likes.
pub fn bubble_diameter(likes: u32, viewport_width: f32) -> f32 {
    let base = if viewport_width < MOBILE_BREAKPOINT {
        MOBILE_BASE_DIAMETER
    } else {
        DESKTOP_BASE_DIAMETER
    };
    base + (likes as f32 * PX_PER_LIKE).min(MAX_LIKES_GROWTH)
}

/// Format a diameter the way it is written into the element's style.
pub fn size_hint(diameter: f32) -> String {
    format!("{}px", diameter.round() as i64)
}

/// Parse the leading integer of a size hint.
///
/// Accepts leading whitespace, an optional sign and any trailing unit
/// (`" 120px"`, `"96.5px"` → 96). Returns `None` when there are no digits.
pub fn parse_leading_int(hint: &str) -> Option<i64> {
    let s = hint.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long digit strings instead of failing.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Resolve a size hint to a positive diameter, falling back to `default`.
pub fn diameter_from_hint(hint: Option<&str>, default: f32) -> f32 {
    match hint.and_then(parse_leading_int) {
        Some(d) if d > 0 => d as f32,
        _ => {
            log::debug!("size hint {:?} unusable, using {}px", hint, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likes_grow_bubbles_up_to_cap() {
        assert_eq!(bubble_diameter(0, 1200.0), 140.0);
        assert_eq!(bubble_diameter(3, 1200.0), 155.0);
        assert_eq!(bubble_diameter(500, 1200.0), 240.0);
        assert_eq!(bubble_diameter(2, 400.0), 90.0);
    }

    #[test]
    fn size_hint_round_trips_through_parser() {
        assert_eq!(size_hint(155.0), "155px");
        assert_eq!(diameter_from_hint(Some(&size_hint(155.0)), 120.0), 155.0);
    }

    #[test]
    fn parses_like_css_pixel_values() {
        assert_eq!(parse_leading_int("120px"), Some(120));
        assert_eq!(parse_leading_int("  96.5px"), Some(96));
        assert_eq!(parse_leading_int("+40"), Some(40));
        assert_eq!(parse_leading_int("-5px"), Some(-5));
        assert_eq!(parse_leading_int("px"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn unusable_hints_fall_back() {
        assert_eq!(diameter_from_hint(None, 120.0), 120.0);
        assert_eq!(diameter_from_hint(Some("auto"), 120.0), 120.0);
        assert_eq!(diameter_from_hint(Some("0px"), 120.0), 120.0);
        assert_eq!(diameter_from_hint(Some("-30px"), 120.0), 120.0);
        assert_eq!(diameter_from_hint(Some("180px"), 120.0), 180.0);
    }
}
