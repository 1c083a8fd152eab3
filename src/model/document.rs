//! Application draft: the explicit context object for wizard state.

use super::{Section, SectionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete state of one grant application draft.
///
/// Replaces the ambient per-session key/value store of the wizard UI:
/// every step's input, generated draft, and edit lives in a named field
/// here, with last-write-wins semantics on the setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    /// Applicant metadata collected in the first wizard step
    pub metadata: Metadata,

    /// One section per `SectionKind`, in export order
    sections: Vec<(SectionKind, Section)>,
}

impl ApplicationDraft {
    /// Create a draft with all sections empty.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            sections: SectionKind::ALL
                .into_iter()
                .map(|kind| (kind, Section::new()))
                .collect(),
        }
    }

    /// Get a section by kind.
    pub fn section(&self, kind: SectionKind) -> &Section {
        // Missing entries can only come from hand-edited JSON; resolve
        // them to an empty section instead of failing.
        static EMPTY: Section = Section {
            user_input: String::new(),
            generated: None,
            edited: None,
        };
        self.sections
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, s)| s)
            .unwrap_or(&EMPTY)
    }

    fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        let pos = match self.sections.iter().position(|(k, _)| *k == kind) {
            Some(pos) => pos,
            None => {
                self.sections.push((kind, Section::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[pos].1
    }

    /// Record the wizard answer a section will be drafted from.
    pub fn record_input(&mut self, kind: SectionKind, input: impl Into<String>) {
        self.section_mut(kind).user_input = input.into();
    }

    /// Record the text returned by the drafting service.
    pub fn record_generated(&mut self, kind: SectionKind, text: impl Into<String>) {
        self.section_mut(kind).generated = Some(text.into());
    }

    /// Record a manual user edit, overriding the generated draft.
    pub fn record_edit(&mut self, kind: SectionKind, text: impl Into<String>) {
        self.section_mut(kind).edited = Some(text.into());
    }

    /// Iterate sections in export order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionKind, &Section)> {
        SectionKind::ALL.into_iter().map(|kind| (kind, self.section(kind)))
    }

    /// Count sections with exportable content.
    pub fn populated_count(&self) -> usize {
        self.sections().filter(|(_, s)| !s.is_empty()).count()
    }

    /// Check if no section has content.
    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }
}

/// Applicant metadata (first wizard step).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Organisation name
    pub organisation: Option<String>,

    /// Contact person
    pub contact: Option<String>,

    /// Contact e-mail
    pub email: Option<String>,

    /// When the draft was started
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata stamped with the current time.
    pub fn now() -> Self {
        Self {
            created: Some(Utc::now()),
            ..Default::default()
        }
    }
}
