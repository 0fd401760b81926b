//! Text layout of command results.
//!
//! A result with a heading renders as:
//!
//! ```text
//! <heading>
//! <one line per listed item>
//! <one line per message>
//! <separator>
//! ```
//!
//! A result without a heading renders nothing.

use crate::commands::CmdResult;

pub const DEFAULT_SEPARATOR_WIDTH: usize = 30;
const SEPARATOR_CHAR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator: String,
}

impl RenderOptions {
    pub fn with_separator_width(width: usize) -> Self {
        Self {
            separator: SEPARATOR_CHAR.to_string().repeat(width),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::with_separator_width(DEFAULT_SEPARATOR_WIDTH)
    }
}

/// Output lines for one result, without line terminators.
pub fn render_result(result: &CmdResult, options: &RenderOptions) -> Vec<String> {
    let Some(heading) = result.heading else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(result.listed_items.len() + result.messages.len() + 2);
    lines.push(heading.to_string());
    lines.extend(result.listed_items.iter().map(|item| item.render()));
    lines.extend(result.messages.iter().map(|message| message.to_string()));
    lines.push(options.separator.clone());
    lines
}
