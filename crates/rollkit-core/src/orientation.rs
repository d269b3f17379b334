#![forbid(unsafe_code)]

//! Slide orientation.
//!
//! The orientation names the direction content travels: with
//! [`Orientation::BottomToTop`] the incoming child rises from below while the
//! outgoing child leaves through the top.
//!
//! Hosts that persist the orientation as an integer (layout attributes,
//! preference stores) use the legacy codes via [`Orientation::from_code`] and
//! [`Orientation::code`]. Unknown codes are rejected, never mapped to a
//! default.

use std::fmt;
use std::str::FromStr;

use crate::error::CarouselError;

/// Direction of the slide between two consecutive children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Content moves downward.
    #[cfg_attr(feature = "serde", serde(alias = "up_down"))]
    TopToBottom,
    /// Content moves upward (default).
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "down_up"))]
    BottomToTop,
    /// Content moves rightward.
    #[cfg_attr(feature = "serde", serde(alias = "left_right"))]
    LeftToRight,
    /// Content moves leftward.
    #[cfg_attr(feature = "serde", serde(alias = "right_left"))]
    RightToLeft,
}

impl Orientation {
    /// All orientations in declaration order.
    pub const ALL: [Self; 4] = [
        Self::TopToBottom,
        Self::BottomToTop,
        Self::LeftToRight,
        Self::RightToLeft,
    ];

    /// Legacy integer code for top-to-bottom.
    pub const CODE_TOP_TO_BOTTOM: i32 = 1001;
    /// Legacy integer code for bottom-to-top.
    pub const CODE_BOTTOM_TO_TOP: i32 = 1002;
    /// Legacy integer code for left-to-right.
    pub const CODE_LEFT_TO_RIGHT: i32 = 2001;
    /// Legacy integer code for right-to-left.
    pub const CODE_RIGHT_TO_LEFT: i32 = 2002;

    /// Decode a legacy integer code.
    pub fn from_code(code: i32) -> Result<Self, CarouselError> {
        match code {
            Self::CODE_TOP_TO_BOTTOM => Ok(Self::TopToBottom),
            Self::CODE_BOTTOM_TO_TOP => Ok(Self::BottomToTop),
            Self::CODE_LEFT_TO_RIGHT => Ok(Self::LeftToRight),
            Self::CODE_RIGHT_TO_LEFT => Ok(Self::RightToLeft),
            other => Err(CarouselError::UnknownOrientation(other)),
        }
    }

    /// Legacy integer code for this orientation.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::TopToBottom => Self::CODE_TOP_TO_BOTTOM,
            Self::BottomToTop => Self::CODE_BOTTOM_TO_TOP,
            Self::LeftToRight => Self::CODE_LEFT_TO_RIGHT,
            Self::RightToLeft => Self::CODE_RIGHT_TO_LEFT,
        }
    }

    /// The geometrically opposite orientation.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::TopToBottom => Self::BottomToTop,
            Self::BottomToTop => Self::TopToBottom,
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
        }
    }

    /// Whether content travels along the y axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }

    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopToBottom => "top_to_bottom",
            Self::BottomToTop => "bottom_to_top",
            Self::LeftToRight => "left_to_right",
            Self::RightToLeft => "right_to_left",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for Orientation {
    type Error = CarouselError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl FromStr for Orientation {
    type Err = CarouselError;

    /// Accepts snake_case, kebab-case, and the legacy short names
    /// (`up_down`, `down_up`, `left_right`, `right_left`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "top_to_bottom" | "up_down" => Ok(Self::TopToBottom),
            "bottom_to_top" | "down_up" => Ok(Self::BottomToTop),
            "left_to_right" | "left_right" => Ok(Self::LeftToRight),
            "right_to_left" | "right_left" => Ok(Self::RightToLeft),
            _ => Err(CarouselError::UnknownOrientationName(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bottom_to_top() {
        assert_eq!(Orientation::default(), Orientation::BottomToTop);
    }

    #[test]
    fn codes_round_trip() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_code(o.code()), Ok(o));
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(
            Orientation::from_code(0),
            Err(CarouselError::UnknownOrientation(0))
        );
        assert_eq!(
            Orientation::try_from(1003),
            Err(CarouselError::UnknownOrientation(1003))
        );
    }

    #[test]
    fn reversed_is_involution() {
        for o in Orientation::ALL {
            assert_ne!(o.reversed(), o);
            assert_eq!(o.reversed().reversed(), o);
            assert_eq!(o.reversed().is_vertical(), o.is_vertical());
        }
    }

    #[test]
    fn parse_accepts_all_spellings() {
        assert_eq!("bottom_to_top".parse(), Ok(Orientation::BottomToTop));
        assert_eq!("Bottom-To-Top".parse(), Ok(Orientation::BottomToTop));
        assert_eq!("down_up".parse(), Ok(Orientation::BottomToTop));
        assert_eq!("up-down".parse(), Ok(Orientation::TopToBottom));
        assert_eq!("left_right".parse(), Ok(Orientation::LeftToRight));
        assert_eq!(" right_to_left ".parse(), Ok(Orientation::RightToLeft));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(CarouselError::UnknownOrientationName(name)) if name == "diagonal"
        ));
    }

    #[test]
    fn display_matches_parse() {
        for o in Orientation::ALL {
            assert_eq!(o.to_string().parse(), Ok(o));
        }
    }
}
