//! Viewport geometry for the bounding-box visibility check.
//!
//! Coordinates are CSS pixels with y growing downwards, matching what a host
//! gets from `getBoundingClientRect()`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RevealError;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping part of two rectangles, or None when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Grow each edge outwards by the margin; negative margins shrink it.
    pub fn expand(&self, m: &RootMargin) -> Rect {
        let left = self.left() - m.left;
        let top = self.top() - m.top;
        let right = self.right() + m.right;
        let bottom = self.bottom() + m.bottom;
        Rect::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }
}

/// Viewport-edge adjustment applied before intersection testing.
///
/// Parsed from the CSS margin shorthand (`"0px 0px -50px 0px"`), one to four
/// values in `px` or unitless. Serialized back in the four-value form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

fn parse_length(raw: &str, token: &str) -> Result<f32, RevealError> {
    let number = token.strip_suffix("px").unwrap_or(token);
    let value: f32 = number.parse().map_err(|_| RevealError::InvalidMargin {
        raw: raw.to_string(),
        reason: format!("'{token}' is not a pixel length"),
    })?;
    if !value.is_finite() {
        return Err(RevealError::InvalidMargin {
            raw: raw.to_string(),
            reason: format!("'{token}' is not finite"),
        });
    }
    Ok(value)
}

impl FromStr for RootMargin {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|t| parse_length(s, t))
            .collect::<Result<Vec<f32>, _>>()?;
        match values.as_slice() {
            [all] => Ok(Self::new(*all, *all, *all, *all)),
            [v, h] => Ok(Self::new(*v, *h, *v, *h)),
            [t, h, b] => Ok(Self::new(*t, *h, *b, *h)),
            [t, r, b, l] => Ok(Self::new(*t, *r, *b, *l)),
            _ => Err(RevealError::InvalidMargin {
                raw: s.to_string(),
                reason: format!("expected 1 to 4 values, got {}", values.len()),
            }),
        }
    }
}

impl TryFrom<String> for RootMargin {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(m: RootMargin) -> Self {
        m.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Fraction of `target`'s area visible inside the margin-adjusted viewport.
///
/// Zero-area targets report 0.0.
pub fn intersection_ratio(target: &Rect, viewport: &Rect, margin: &RootMargin) -> f32 {
    let area = target.area();
    if area <= 0.0 {
        return 0.0;
    }
    let root = viewport.expand(margin);
    match target.intersect(&root) {
        Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}
