//! The closed landmark-icon vocabulary.
//!
//! Adding an icon is a data change: append a row to `ICONS`. Any icon name
//! not listed here renders without a badge.

/// One badge definition: the 24x24 glyph path, the badge disc color, and
/// whether the landmark's own outline fill is suppressed (small-marker
/// icons like houses draw only the badge).
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub name: &'static str,
    pub badge_color: &'static str,
    pub glyph: &'static str,
    pub suppress_fill: bool,
}

const HOUSE_GLYPH: &str = "M10,20V14H14V20H19V12H22L12,3L2,12H5V20H10Z";

const TREE_GLYPH: &str = "M11,21V16.74C10.53,16.91 10.03,17 9.5,17C7.01,17 5,14.99 5,12.5\
C5,11.23 5.5,10.09 6.36,9.27C6.13,8.73 6,8.13 6,7.5C6,5.01 8.01,3 \
10.5,3C12.06,3 13.44,3.8 14.25,5C14.33,5 14.41,5 14.5,5C16.99,5 \
19,7.01 19,9.5C19,10.8 18.45,11.97 17.57,12.79C17.84,13.33 18,13.9 \
18,14.5C18,16.99 15.99,19 13.5,19C13.03,19 12.57,18.92 12.13,18.77\
V21H11Z";

pub const ICONS: &[IconSpec] = &[
    IconSpec {
        name: "house",
        badge_color: "#44739e",
        glyph: HOUSE_GLYPH,
        suppress_fill: true,
    },
    IconSpec {
        name: "tree",
        badge_color: "#4a7c3f",
        glyph: TREE_GLYPH,
        suppress_fill: false,
    },
];

pub fn lookup(name: &str) -> Option<&'static IconSpec> {
    ICONS.iter().find(|icon| icon.name == name)
}
