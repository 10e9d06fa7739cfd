//! Game-log XML parsing and typed node accessors.
//!
//! A game log nests `inning` → `half` → `atbat` → `pitch` elements. We parse
//! the whole file into a read-only tree and expose the pieces the pipeline
//! cares about through thin typed views, with explicit present/absent
//! attribute handling instead of exceptions-as-control-flow.
//!
//! Malformed input fails the parse for the whole file; no partial-tree
//! recovery is attempted.

use roxmltree::{Document, Node};

use crate::error::MalformedDocument;

/// One parsed game-log document.
///
/// Borrows the file's text, so the caller keeps the `String` alive for as
/// long as it traverses the log.
pub struct GameLog<'input> {
    doc: Document<'input>,
}

impl<'input> GameLog<'input> {
    /// Parse a game log from its raw text.
    pub fn parse(text: &'input str) -> Result<Self, MalformedDocument> {
        let doc = Document::parse(text).map_err(|e| MalformedDocument::new(e.to_string()))?;
        Ok(Self { doc })
    }

    /// All at-bats in document order: inning by inning, half by half.
    ///
    /// Non-`atbat` children of a half-inning (steals, pickoffs, commentary)
    /// are ignored.
    pub fn at_bats(&self) -> Vec<AtBatNode<'_>> {
        let mut out = Vec::new();
        for inning in elements(self.doc.root_element()) {
            for half in elements(inning) {
                for event in elements(half) {
                    if event.has_tag_name("atbat") {
                        out.push(AtBatNode { node: event });
                    }
                }
            }
        }
        out
    }
}

fn elements<'a>(node: Node<'a, 'a>) -> impl Iterator<Item = Node<'a, 'a>> {
    node.children().filter(Node::is_element)
}

/// Typed view of a single `atbat` element.
///
/// Accessors return `Option` for attributes the schema allows to be absent;
/// classification and error policy live in `extract`, not here.
#[derive(Clone, Copy)]
pub struct AtBatNode<'a> {
    node: Node<'a, 'a>,
}

impl<'a> AtBatNode<'a> {
    /// The raw outcome-event name, e.g. `"Strikeout"`.
    pub fn event(&self) -> Option<&'a str> {
        self.node.attribute("event")
    }

    /// The pitcher's throwing hand code (`L`/`R`).
    pub fn pitcher_throws(&self) -> Option<&'a str> {
        self.node.attribute("p_throws")
    }

    /// The batter's stance code (`L`/`R`).
    pub fn batter_stands(&self) -> Option<&'a str> {
        self.node.attribute("stand")
    }

    /// Raw pitch-type codes of this at-bat's pitches, in thrown order.
    ///
    /// Only `pitch` children are considered, and a pitch element without a
    /// `pitch_type` attribute is skipped entirely (it contributes no
    /// position to the sequence).
    pub fn pitch_type_codes(&self) -> Vec<&'a str> {
        elements(self.node)
            .filter(|n| n.has_tag_name("pitch"))
            .filter_map(|n| n.attribute("pitch_type"))
            .collect()
    }
}
