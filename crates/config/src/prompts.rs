//! Prompt Composer
//!
//! Builds the system instruction for a session from the captured profile.
//! The template is data so deployments can tune wording from config while
//! the rendered structure stays fixed.

use franchise_assistant_core::UserProfile;
use serde::{Deserialize, Serialize};

/// System instruction template for the franchise advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorPrompt {
    /// Opening role line
    pub role: String,
    /// Market the advisor is restricted to
    pub market: String,
    /// Behavioral rules; `{language}` and `{market}` are substituted
    pub rules: Vec<String>,
    /// Fixed conversation sequence, in order
    pub sequence: Vec<String>,
    /// Formatting guidance
    pub formatting: Vec<String>,
}

impl Default for AdvisorPrompt {
    fn default() -> Self {
        Self {
            role: "You are an expert franchise investment advisor helping people find and evaluate franchise opportunities.".to_string(),
            market: "India".to_string(),
            rules: vec![
                "Respond ONLY in {language}. Never switch to another language, even if the user writes in one.".to_string(),
                "Ask exactly ONE question per reply. Never ask multiple questions at once.".to_string(),
                "Discuss only franchise investment and ownership in {market}. If the user asks about anything else, politely redirect them back to franchise topics, in {language}.".to_string(),
                "Follow the conversation sequence below strictly, one stage at a time.".to_string(),
                "Ground every suggestion in the user's location and budget given below.".to_string(),
                "Use markdown for readability: bullet lists, **bold** brand names and key figures.".to_string(),
            ],
            sequence: vec![
                "Business category interest".to_string(),
                "Experience level".to_string(),
                "Risk tolerance".to_string(),
                "Investment goals and timeline".to_string(),
                "Tailored franchise recommendations".to_string(),
            ],
            formatting: vec![
                "Keep replies short and conversational.".to_string(),
                "When recommending, list 3-5 franchises with investment range, expected ROI period and why each fits.".to_string(),
            ],
        }
    }
}

impl AdvisorPrompt {
    /// Render the system instruction for `profile`.
    ///
    /// Deterministic: the same profile always yields the same text.
    pub fn compose(&self, profile: &UserProfile) -> String {
        let language = profile.language.display_name();
        let native = profile.language.native_name();
        let language_label = if native == language {
            language.to_string()
        } else {
            format!("{} ({})", language, native)
        };

        let mut prompt = format!("{}\n\n", self.role);

        prompt.push_str("## User Profile\n");
        prompt.push_str(&format!("- Name: {}\n", profile.name));
        prompt.push_str(&format!("- Preferred language: {}\n", language_label));
        prompt.push_str(&format!("- Location: {}\n", profile.location));
        prompt.push_str(&format!(
            "- Investment budget: {} ({})\n",
            profile.budget.formatted_range(),
            profile.budget.label()
        ));

        prompt.push_str("\n## Rules (MUST FOLLOW)\n");
        for (i, rule) in self.rules.iter().enumerate() {
            let rule = rule
                .replace("{language}", language)
                .replace("{market}", &self.market);
            prompt.push_str(&format!("{}. {}\n", i + 1, rule));
        }

        prompt.push_str("\n## Conversation Sequence\n");
        for (i, stage) in self.sequence.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, stage));
        }

        prompt.push_str("\n## Context\n");
        prompt.push_str(&format!(
            "The user is looking for franchises in {} ({}) with a budget of {}. Only recommend franchises that are available there and fit this budget.\n",
            profile.location,
            self.market,
            profile.budget.formatted_range()
        ));

        if !self.formatting.is_empty() {
            prompt.push_str("\n## Formatting\n");
            for line in &self.formatting {
                prompt.push_str(&format!("- {}\n", line));
            }
        }

        prompt.push_str(&format!(
            "\nRemember: reply in {} only, and ask one question at a time.\n",
            language
        ));

        prompt
    }
}
