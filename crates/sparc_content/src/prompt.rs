//! Generation prompt construction.

use sparc_core::{ContentType, NOT_SPECIFIED, PersonaProfile, TagSet, Tone};

const DEFAULT_AUDIENCE: &str = "the data industry";

/// Builds the instruction sent for a content generation request.
///
/// Pure and deterministic: the same inputs always produce byte-identical
/// output. Blank or missing inputs are replaced by [`NOT_SPECIFIED`] rather
/// than rejected.
///
/// # Examples
///
/// ```
/// use sparc_content::PromptBuilder;
/// use sparc_core::{ContentType, ExperienceLevel, PersonaProfile, Tone};
///
/// let persona = PersonaProfile::new("Dana", "Data Engineer")
///     .with_experience(ExperienceLevel::Senior);
/// let prompt = PromptBuilder::new("Launch v2", &persona, ContentType::ProductDeepDive, Tone::Technical)
///     .build();
///
/// assert!(prompt.starts_with("Create Product Deep Dives content"));
/// assert!(prompt.contains("Target Audience: Data Engineer with Senior Level experience"));
/// assert!(prompt.contains("Technical Level: Not specified"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    goal: &'a str,
    persona: &'a PersonaProfile,
    content_type: ContentType,
    tone: Tone,
    industries: Option<&'a TagSet>,
}

impl<'a> PromptBuilder<'a> {
    /// Start a prompt for `goal` aimed at `persona`.
    pub fn new(
        goal: &'a str,
        persona: &'a PersonaProfile,
        content_type: ContentType,
        tone: Tone,
    ) -> Self {
        Self {
            goal,
            persona,
            content_type,
            tone,
            industries: None,
        }
    }

    /// Target the campaign's industries instead of the default audience.
    pub fn with_industries(mut self, industries: &'a TagSet) -> Self {
        self.industries = Some(industries);
        self
    }

    fn goal_label(&self) -> &str {
        match self.goal.trim() {
            "" => NOT_SPECIFIED,
            goal => goal,
        }
    }

    fn audience_label(&self) -> String {
        match self.industries {
            Some(industries) if !industries.is_empty() => industries.joined(", "),
            _ => DEFAULT_AUDIENCE.to_string(),
        }
    }

    /// Render the prompt.
    pub fn build(&self) -> String {
        let mut lines = vec![
            format!(
                "Create {} content with the following specifications:",
                self.content_type
            ),
            String::new(),
            format!("Campaign Goal: {}", self.goal_label()),
            format!(
                "Target Audience: {} with {} experience",
                self.persona.roles_label(),
                self.persona.experience_label()
            ),
            format!("Technical Level: {}", self.persona.proficiency_label()),
            format!("Tone: {}", self.tone),
        ];

        if !self.persona.content_styles.is_empty() {
            let styles: Vec<String> = self
                .persona
                .content_styles
                .iter()
                .map(ToString::to_string)
                .collect();
            lines.push(format!("Preferred Content Style: {}", styles.join(", ")));
        }
        if let Some(pain_points) = self
            .persona
            .pain_points
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            lines.push(format!("Key Pain Points: {}", pain_points));
        }

        lines.push(String::new());
        lines.push(format!(
            "The content should be engaging, informative, and specifically tailored for \
             professionals in {}. Include relevant technical details while maintaining the \
             specified tone.",
            self.audience_label()
        ));
        lines.join("\n")
    }
}

/// Convenience for [`PromptBuilder::build`] without industries.
pub fn build_prompt(
    goal: &str,
    persona: &PersonaProfile,
    content_type: ContentType,
    tone: Tone,
) -> String {
    PromptBuilder::new(goal, persona, content_type, tone).build()
}
