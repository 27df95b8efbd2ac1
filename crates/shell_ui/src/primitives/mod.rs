//! Shared layout, typography, data-display, control, and terminal primitives.

use leptos::*;

mod controls;
mod data_display;
mod layout;
mod terminal;

pub use controls::{CommandButton, TextLink};
pub use data_display::{Card, Heading, ImageFrame, ListItem, ListSurface, Text};
pub use layout::{Cluster, Grid, Stack};
pub use terminal::{Separator, TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spacing tokens shared by stacks, clusters, and grids.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Smallest non-zero gap.
    Xs,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
    /// Extra large gap.
    Xl,
    /// Widest gap.
    Xxl,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Xs
    }
}

impl LayoutGap {
    /// Maps a numeric spacing step (`0`, `1`, `2`, `3`, `4`, `6`, `8`) onto a token.
    pub fn from_scale(step: u32) -> Option<Self> {
        match step {
            0 => Some(Self::None),
            1 => Some(Self::Xs),
            2 => Some(Self::Sm),
            3 => Some(Self::Md),
            4 => Some(Self::Lg),
            6 => Some(Self::Xl),
            8 => Some(Self::Xxl),
            _ => None,
        }
    }

    /// Stylesheet token.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text color tones.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Muted, secondary text.
    Muted,
    /// Accent text.
    Accent,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    /// Parses a text `variant` name.
    pub fn from_variant(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Primary),
            "muted" => Some(Self::Muted),
            "accent" => Some(Self::Accent),
            _ => None,
        }
    }

    /// Stylesheet token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Muted => "muted",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Font size steps.
pub enum TextSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Body size.
    Base,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
    /// Display size.
    Xxl,
}

impl Default for TextSize {
    fn default() -> Self {
        Self::Base
    }
}

impl TextSize {
    /// Parses a size token such as `sm` or `xl`.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "base" => Some(Self::Base),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "2xl" => Some(Self::Xxl),
            _ => None,
        }
    }

    /// Stylesheet token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Font weights.
pub enum TextWeight {
    /// Regular weight.
    Normal,
    /// Medium weight.
    Medium,
    /// Semibold weight.
    Semibold,
    /// Bold weight.
    Bold,
}

impl Default for TextWeight {
    fn default() -> Self {
        Self::Normal
    }
}

impl TextWeight {
    /// Parses a weight token such as `semibold`.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw {
            "normal" => Some(Self::Normal),
            "medium" => Some(Self::Medium),
            "semibold" => Some(Self::Semibold),
            "bold" => Some(Self::Bold),
            _ => None,
        }
    }

    /// Stylesheet token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Grid column counts.
pub enum GridColumns {
    /// One column.
    One,
    /// Two columns.
    Two,
    /// Three columns.
    Three,
    /// Four columns.
    Four,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self::One
    }
}

impl GridColumns {
    /// Maps a column count in `1..=4`.
    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Stylesheet token.
    pub fn token(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Two-column templates applied from the medium breakpoint up.
pub enum GridTemplate {
    /// Content-sized first column, flexible second column.
    AutoFirst,
    /// Flexible first column, content-sized second column.
    AutoLast,
}

impl GridTemplate {
    /// Parses `auto_1fr` or `1fr_auto`.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw {
            "auto_1fr" => Some(Self::AutoFirst),
            "1fr_auto" => Some(Self::AutoLast),
            _ => None,
        }
    }

    /// Stylesheet token.
    pub fn token(self) -> &'static str {
        match self {
            Self::AutoFirst => "auto-1fr",
            Self::AutoLast => "1fr-auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Leading glyphs for hyperlinks.
pub enum LinkIcon {
    /// Paper or preprint.
    Paper,
    /// Source repository.
    Github,
    /// Recorded talk.
    Video,
    /// Generic link.
    Link,
}

impl LinkIcon {
    /// Parses an icon name.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw {
            "paper" => Some(Self::Paper),
            "github" => Some(Self::Github),
            "video" => Some(Self::Video),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    /// Stylesheet token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Github => "github",
            Self::Video => "video",
            Self::Link => "link",
        }
    }
}

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
