//! Application sections and their content lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel stored when a section has no content at all.
///
/// The converter recognizes this value (trimmed) and renders the
/// placeholder paragraph instead of a literal asterisk-wrapped line.
pub const NO_CONTENT_SENTINEL: &str = "*No content provided for this section*";

/// Placeholder paragraph text rendered for empty sections.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content provided for this section";

/// The fixed, ordered set of sections in an exported application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ProjectSummary,
    ChallengesAndNeeds,
    TargetGroup,
    OrganisationStructure,
    RiskAnalysis,
    CommunicationPlan,
    InternalPolicies,
}

impl SectionKind {
    /// All sections in export order.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::ProjectSummary,
        SectionKind::ChallengesAndNeeds,
        SectionKind::TargetGroup,
        SectionKind::OrganisationStructure,
        SectionKind::RiskAnalysis,
        SectionKind::CommunicationPlan,
        SectionKind::InternalPolicies,
    ];

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ProjectSummary => "Project Summary",
            SectionKind::ChallengesAndNeeds => "Challenges and Needs",
            SectionKind::TargetGroup => "Target Group",
            SectionKind::OrganisationStructure => "Organisation Structure",
            SectionKind::RiskAnalysis => "Risk Analysis",
            SectionKind::CommunicationPlan => "Communication Plan",
            SectionKind::InternalPolicies => "Internal Policies",
        }
    }

    /// 0-based position in export order.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    /// Look up a section by its title, case-insensitively.
    pub fn from_title(title: &str) -> Option<SectionKind> {
        let needle = title.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.title().to_lowercase() == needle)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One named slot of the final document.
///
/// Populated once by the drafting service, optionally overwritten by a
/// user edit, and read once at export time. Overwrites are
/// last-write-wins; nothing is ever deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Raw wizard answer this section was drafted from
    #[serde(default)]
    pub user_input: String,

    /// Draft text returned by the drafting service
    #[serde(default)]
    pub generated: Option<String>,

    /// Manual override entered by the user
    #[serde(default)]
    pub edited: Option<String>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the text to export: user edit first, then the generated
    /// draft, then nothing.
    pub fn content(&self) -> Option<&str> {
        self.edited
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self
                .generated
                .as_deref()
                .filter(|s| !s.trim().is_empty()))
    }

    /// Export text with the no-content sentinel substituted when the
    /// section is empty.
    pub fn content_or_sentinel(&self) -> &str {
        self.content().unwrap_or(NO_CONTENT_SENTINEL)
    }

    /// Whether the exported text came from the drafting service rather
    /// than a manual edit.
    pub fn is_generated(&self) -> bool {
        self.edited.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.generated.is_some()
    }

    /// Check if the section has any exportable content.
    pub fn is_empty(&self) -> bool {
        self.content().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_stable() {
        assert_eq!(SectionKind::ALL[0], SectionKind::ProjectSummary);
        assert_eq!(SectionKind::ALL[6], SectionKind::InternalPolicies);
        assert_eq!(SectionKind::RiskAnalysis.index(), 4);
    }

    #[test]
    fn test_from_title() {
        assert_eq!(
            SectionKind::from_title("target group"),
            Some(SectionKind::TargetGroup)
        );
        assert_eq!(SectionKind::from_title("Budget"), None);
    }

    #[test]
    fn test_content_resolution() {
        let mut section = Section::new();
        assert!(section.is_empty());
        assert_eq!(section.content_or_sentinel(), NO_CONTENT_SENTINEL);

        section.generated = Some("draft".into());
        assert_eq!(section.content(), Some("draft"));
        assert!(section.is_generated());

        section.edited = Some("edited".into());
        assert_eq!(section.content(), Some("edited"));
        assert!(!section.is_generated());
    }

    #[test]
    fn test_blank_edit_falls_back_to_draft() {
        let section = Section {
            user_input: String::new(),
            generated: Some("draft".into()),
            edited: Some("   ".into()),
        };
        assert_eq!(section.content(), Some("draft"));
        assert!(section.is_generated());
    }
}
