//! Pure per-listing rules: rating normalization and detail-URL resolution.

/// Upward traversal every relative detail link starts with.
pub const TRAVERSAL_PREFIX: &str = "../../../";

/// The site's star-rating vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarRating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl StarRating {
    /// Look up a rating label. Case-sensitive, as emitted by the site.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "One" => Some(Self::One),
            "Two" => Some(Self::Two),
            "Three" => Some(Self::Three),
            "Four" => Some(Self::Four),
            "Five" => Some(Self::Five),
            _ => None,
        }
    }

    pub fn stars(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

/// Normalize the rating marker's `class` attribute to 0..=5.
///
/// The label is the second class token (`star-rating Three`). A missing
/// marker, missing attribute, missing token or unknown label yields 0.
pub fn normalize_rating(class_attr: Option<&str>) -> u8 {
    class_attr
        .and_then(|classes| classes.split_whitespace().nth(1))
        .and_then(StarRating::from_label)
        .map_or(0, StarRating::stars)
}

/// Rewrite a relative detail link onto the catalog base.
///
/// Only valid for the site's fixed link depth: the traversal prefix is
/// dropped and the remainder appended to `base`.
pub fn resolve_detail_url(base: &str, relative: &str) -> String {
    format!("{base}{}", relative.replace(TRAVERSAL_PREFIX, ""))
}
