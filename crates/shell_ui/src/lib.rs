//! Presentation primitives for the terminal page.
//!
//! Every primitive renders a `data-ui-kind` element with token attributes (`data-ui-gap`,
//! `data-ui-tone`, ...) consumed by the page stylesheet. The renderer maps document nodes onto
//! these primitives and never emits ad hoc markup of its own.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Card, Cluster, CommandButton, Grid, GridColumns, GridTemplate, Heading, ImageFrame,
    LayoutGap, LinkIcon, ListItem, ListSurface, Separator, Stack, TerminalLine, TerminalPrompt,
    TerminalSurface, TerminalTranscript, Text, TextLink, TextSize, TextTone, TextWeight,
};

/// Convenience imports for crates composing the primitive set.
pub mod prelude {
    pub use crate::{
        Card, Cluster, CommandButton, Grid, GridColumns, GridTemplate, Heading, ImageFrame,
        LayoutGap, LinkIcon, ListItem, ListSurface, Separator, Stack, TerminalLine,
        TerminalPrompt, TerminalSurface, TerminalTranscript, Text, TextLink, TextSize, TextTone,
        TextWeight,
    };
}
