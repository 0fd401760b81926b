use crate::model::Item;
use std::fmt;

pub mod add;
pub mod display;
pub mod remove;
pub mod search;

/// The section title a command prints before its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    RemoveResults,
    SearchResults,
    Inventory,
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Heading::RemoveResults => "REMOVE RESULTS:",
            Heading::SearchResults => "SEARCH RESULTS:",
            Heading::Inventory => "INVENTORY:",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdMessage {
    ItemRemoved,
    ItemNotFound,
}

impl fmt::Display for CmdMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CmdMessage::ItemRemoved => "Item is removed.",
            CmdMessage::ItemNotFound => "Item is not found.",
        };
        f.write_str(text)
    }
}

/// What a command did, for the renderer to lay out.
///
/// A result without a heading produces no output at all.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CmdResult {
    pub heading: Option<Heading>,
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_heading(heading: Heading) -> Self {
        Self {
            heading: Some(heading),
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    /// True when rendering this result writes nothing.
    pub fn is_silent(&self) -> bool {
        self.heading.is_none()
    }
}
