//! Prompt templates for the staged onboarding ("spark") conversation.
//!
//! Every onboarding prompt has the same three parts:
//!
//! ```text
//! <preamble>
//!
//! Instruction: <stage instruction>
//!
//! User_Prompt: <User_Story>…</User_Story>
//! <Previous_Nudge>…</Previous_Nudge>
//! ```

use crate::core::string::last_sentences;
use crate::session::stage::OnboardingStage;
use crate::story::ContentSnapshot;

/// Literal sent as the previous nudge before the model has said anything.
pub const NO_PREVIOUS_NUDGE: &str = "Null";

/// Number of trailing story sentences included in each prompt.
pub const DEFAULT_SENTENCE_WINDOW: usize = 4;

/// Templates for the onboarding conversation.
pub struct OnboardingPromptTemplate;

impl OnboardingPromptTemplate {
    /// Built-in role used when no template or system prompt is configured.
    pub fn default_role() -> &'static str {
        "Role: You are a Socratic tutor supporting the creative writing development of students. \
Only ask a single leading question; do not generate story prose."
    }

    /// The stage-specific instruction.
    pub fn instruction(stage: OnboardingStage, ready_signal_json: &str) -> String {
        match stage {
            OnboardingStage::Sensory => "Ask the user a sensory question to start their story. \
Only ask a question, do not generate prose."
                .to_string(),
            OnboardingStage::Narrowing => {
                "Based on the user's answer, ask an attribute narrowing question. Only ask a question."
                    .to_string()
            }
            OnboardingStage::Scenario => "Based on previous answers, ask a scenario question to \
help the user imagine a situation. Only ask a question."
                .to_string(),
            OnboardingStage::Readiness => format!(
                "If the user is ready, output JSON: {}. Otherwise, ask a final clarifying question.",
                ready_signal_json
            ),
        }
    }

    /// Variables offered to stored templates.
    pub fn template_variables(snapshot: &ContentSnapshot) -> [(&'static str, &str); 3] {
        [
            ("Genre", snapshot.genre_or_default()),
            ("Archetype", snapshot.archetype_or_unknown()),
            ("Age", snapshot.age_or_unknown()),
        ]
    }

    /// Resolve the preamble.
    ///
    /// A non-empty formatted template is used verbatim. Otherwise the
    /// configured system prompt (or [`default_role`](Self::default_role))
    /// is wrapped with the story metadata and input description.
    pub fn preamble(
        formatted_template: Option<&str>,
        system_prompt: Option<&str>,
        snapshot: &ContentSnapshot,
    ) -> String {
        if let Some(template) = formatted_template.filter(|t| !t.trim().is_empty()) {
            return template.to_string();
        }

        let base = system_prompt
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(Self::default_role());

        format!(
            "{}\n\
Story_Metadata: Genre: {}, Story Archetype: {}, Target Age: {}\n\
Input: You will receive a two part <user_prompt>:\n\
* <User_Story>The story segment that immediately preceded the stuck moment in the students own typing\n\
* <Previous_Nudge>The last nudge you gave to the student. If null or Null, then discard this data\n\
Expectations: Output a single Socratic leading question per the above.",
            base,
            snapshot.genre_or_default(),
            snapshot.archetype_or_unknown(),
            snapshot.age_or_unknown(),
        )
    }

    /// The user part: the story excerpt and the previous nudge.
    pub fn user_prompt(content: &str, sentence_window: usize, previous_nudge: Option<&str>) -> String {
        format!(
            "<User_Story>{}</User_Story>\n<Previous_Nudge>{}</Previous_Nudge>",
            last_sentences(content, sentence_window),
            previous_nudge.unwrap_or(NO_PREVIOUS_NUDGE)
        )
    }

    /// Assemble the full prompt.
    pub fn compose(preamble: &str, instruction: &str, user_prompt: &str) -> String {
        format!(
            "{}\n\nInstruction: {}\n\nUser_Prompt: {}",
            preamble, instruction, user_prompt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountConfig;
    use crate::session::status::DEFAULT_READY_SIGNAL_JSON;

    fn snapshot() -> ContentSnapshot {
        ContentSnapshot::new("The door creaked.", AccountConfig::default())
            .with_genre("Mystery")
            .with_age("10")
    }

    #[test]
    fn test_stage_instructions() {
        let sensory = OnboardingPromptTemplate::instruction(OnboardingStage::Sensory, "");
        assert!(sensory.contains("sensory"));
        assert!(sensory.contains("do not generate prose"));

        let narrowing = OnboardingPromptTemplate::instruction(OnboardingStage::Narrowing, "");
        assert!(narrowing.contains("attribute narrowing"));

        let scenario = OnboardingPromptTemplate::instruction(OnboardingStage::Scenario, "");
        assert!(scenario.contains("scenario"));

        let ready = OnboardingPromptTemplate::instruction(
            OnboardingStage::Readiness,
            DEFAULT_READY_SIGNAL_JSON,
        );
        assert!(ready.contains(DEFAULT_READY_SIGNAL_JSON));
        assert!(ready.contains("final clarifying question"));
    }

    #[test]
    fn test_preamble_prefers_template() {
        let preamble =
            OnboardingPromptTemplate::preamble(Some("Custom Prompt Template"), Some("sys"), &snapshot());
        assert_eq!(preamble, "Custom Prompt Template");
    }

    #[test]
    fn test_preamble_uses_system_prompt_then_default() {
        let with_system =
            OnboardingPromptTemplate::preamble(Some("  "), Some("Role: be kind."), &snapshot());
        assert!(with_system.starts_with("Role: be kind."));
        assert!(with_system.contains(
            "Story_Metadata: Genre: Mystery, Story Archetype: Unknown, Target Age: 10"
        ));

        let with_default = OnboardingPromptTemplate::preamble(None, None, &snapshot());
        assert!(with_default.starts_with(OnboardingPromptTemplate::default_role()));
    }

    #[test]
    fn test_user_prompt_without_previous_nudge() {
        let user = OnboardingPromptTemplate::user_prompt("One. Two. Three.", 4, None);
        assert_eq!(
            user,
            "<User_Story>One. Two. Three.</User_Story>\n<Previous_Nudge>Null</Previous_Nudge>"
        );
    }

    #[test]
    fn test_user_prompt_windows_sentences() {
        let user = OnboardingPromptTemplate::user_prompt(
            "A. B. C. D. E. F.",
            4,
            Some("What did it sound like?"),
        );
        assert!(user.contains("<User_Story>C. D. E. F.</User_Story>"));
        assert!(user.contains("<Previous_Nudge>What did it sound like?</Previous_Nudge>"));
    }

    #[test]
    fn test_compose_layout() {
        let prompt = OnboardingPromptTemplate::compose("PRE", "INSTR", "USER");
        assert_eq!(prompt, "PRE\n\nInstruction: INSTR\n\nUser_Prompt: USER");
    }

    #[test]
    fn test_template_variables() {
        let snap = snapshot();
        let vars = OnboardingPromptTemplate::template_variables(&snap);
        assert_eq!(vars[0], ("Genre", "Mystery"));
        assert_eq!(vars[1], ("Archetype", "Unknown"));
        assert_eq!(vars[2], ("Age", "10"));
    }
}
