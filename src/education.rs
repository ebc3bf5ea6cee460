//! Patient education content.
//!
//! A few common topics have built-in teaching points; anything else is
//! summarized by the completion service.

use crate::completion::{CompletionClient, CompletionError, prompt};

/// A topic with hardcoded teaching points.
#[derive(Debug, Clone)]
pub struct EducationTopic {
    /// Display name.
    pub name: &'static str,
    /// Lowercase inputs that select this topic.
    pub aliases: &'static [&'static str],
    pub content: &'static str,
}

/// Built-in education topics.
pub const TOPICS: &[EducationTopic] = &[
    EducationTopic {
        name: "Congestive heart failure",
        aliases: &["chf", "congestive heart failure"],
        content: "CHF Education: Watch salt, daily weight, know warning signs (SOB, swelling), meds adherence.",
    },
    EducationTopic {
        name: "Diabetes",
        aliases: &["diabetes"],
        content: "Diabetes Ed: Monitor BG, proper insulin use, signs of hypo/hyperglycemia, healthy eating.",
    },
];

/// Looks up a built-in topic, ignoring case and surrounding whitespace.
pub fn find_topic(topic: &str) -> Option<&'static EducationTopic> {
    let needle = topic.trim().to_lowercase();
    TOPICS
        .iter()
        .find(|t| t.aliases.iter().any(|alias| *alias == needle))
}

/// Where education content came from.
#[derive(Debug, Clone)]
pub enum EducationContent {
    Canned(&'static EducationTopic),
    Generated(String),
}

impl EducationContent {
    pub fn text(&self) -> &str {
        match self {
            Self::Canned(topic) => topic.content,
            Self::Generated(text) => text,
        }
    }
}

/// Returns built-in content for known topics, otherwise asks the client once.
pub async fn education_for(
    client: &dyn CompletionClient,
    topic: &str,
) -> Result<EducationContent, CompletionError> {
    if let Some(canned) = find_topic(topic) {
        return Ok(EducationContent::Canned(canned));
    }

    let answer = client.complete(&prompt::education_prompt(topic.trim())).await?;
    Ok(EducationContent::Generated(answer))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::completion::test_support::RecordingClient;

    #[test]
    fn test_find_topic_case_insensitive() {
        let upper = find_topic("CHF").unwrap();
        let lower = find_topic("chf").unwrap();
        assert_eq!(upper.name, lower.name);
        assert!(upper.content.starts_with("CHF Education"));
    }

    #[test]
    fn test_find_topic_alias_and_whitespace() {
        assert!(find_topic("  Congestive Heart Failure ").is_some());
        assert_eq!(find_topic("DIABETES").unwrap().name, "Diabetes");
    }

    #[test]
    fn test_find_topic_unknown() {
        assert!(find_topic("warfarin").is_none());
        assert!(find_topic("").is_none());
        assert!(find_topic("heart failure").is_none());
    }

    #[tokio::test]
    async fn test_education_for_known_topic_skips_client() {
        let client = RecordingClient::replying("unused");

        let content = education_for(&client, "chf").await.unwrap();

        assert!(matches!(content, EducationContent::Canned(_)));
        assert!(content.text().starts_with("CHF Education"));
        assert!(client.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_education_for_unknown_topic_calls_client_once() {
        let client = RecordingClient::replying("- Take with food");

        let content = education_for(&client, "metformin").await.unwrap();

        assert_eq!(content.text(), "- Take with food");
        let prompts = client.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("metformin"));
    }

    #[tokio::test]
    async fn test_education_for_propagates_failure() {
        let client = RecordingClient::failing();

        let result = education_for(&client, "metformin").await;

        assert!(matches!(result, Err(CompletionError::RateLimited)));
        assert_eq!(client.prompts().len(), 1);
    }
}
