pub const BUDDY_NAME: &str = "AIBuddy";

const GREETING: &str = "Hello! I'm AIBuddy. Let's learn about artificial intelligence!";
const FALLBACK: &str = "I'm not sure about that. Can you ask me about AI, coding, or robots?";

/// Starter questions shown next to the chat box.
pub const SUGGESTIONS: &[&str] = &[
    "What is AI?",
    "How do robots work?",
    "Can AI make games?",
];

/// Keyword rules, checked in order against the lowercased input.
const RULES: &[(&[&str], &str)] = &[
    (
        &["what is ai"],
        "AI or Artificial Intelligence is technology that helps computers think and learn a bit like humans do!",
    ),
    (
        &["coding"],
        "Coding is how we give instructions to computers. It's like writing a recipe for the computer to follow!",
    ),
    (
        &["robot"],
        "Robots are machines that can do tasks automatically. Some robots use AI to learn and make decisions!",
    ),
    (
        &["game"],
        "We can use AI to make games more fun! AI can control characters and make them act in smart ways.",
    ),
    (
        &["hello", "hi"],
        "Hi there! What would you like to learn about AI today?",
    ),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Speaker {
    Player,
    Buddy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatLine {
    pub fn label(&self) -> String {
        match self.speaker {
            Speaker::Player => format!("You: {}", self.text),
            Speaker::Buddy => format!("{BUDDY_NAME}: {}", self.text),
        }
    }
}

/// Picks the scripted reply for one message. Matching is substring based,
/// so "hi" also fires inside longer words.
pub fn reply_to(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(FALLBACK, |(_, reply)| reply)
}

pub struct AiBuddy {
    transcript: Vec<ChatLine>,
}

impl Default for AiBuddy {
    fn default() -> Self {
        Self::new()
    }
}

impl AiBuddy {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatLine {
                speaker: Speaker::Buddy,
                text: GREETING.to_string(),
            }],
        }
    }

    /// Appends the message and the reply. Blank input is ignored and
    /// returns `None`.
    pub fn send(&mut self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let reply = reply_to(input);
        self.transcript.push(ChatLine {
            speaker: Speaker::Player,
            text: input.to_string(),
        });
        self.transcript.push(ChatLine {
            speaker: Speaker::Buddy,
            text: reply.to_string(),
        });
        Some(reply)
    }

    pub fn transcript(&self) -> &[ChatLine] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let buddy = AiBuddy::new();
        assert_eq!(buddy.transcript().len(), 1);
        assert!(buddy.transcript()[0].label().starts_with("AIBuddy: Hello!"));
    }

    #[test]
    fn test_rules_match_in_order() {
        assert!(reply_to("What is AI?").starts_with("AI or Artificial"));
        // "coding" wins over "robot" because it is listed first.
        assert!(reply_to("robot coding").starts_with("Coding is"));
        assert!(reply_to("I like GAMES").starts_with("We can use AI"));
        assert!(reply_to("hello").starts_with("Hi there"));
        assert_eq!(reply_to("tell me about dinosaurs"), FALLBACK);
    }

    #[test]
    fn test_hi_matches_inside_words() {
        assert!(reply_to("this").starts_with("Hi there"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut buddy = AiBuddy::new();
        assert_eq!(buddy.send("   "), None);
        assert_eq!(buddy.transcript().len(), 1);
    }

    #[test]
    fn test_send_appends_both_sides() {
        let mut buddy = AiBuddy::new();
        buddy.send("  robots? ").unwrap();
        let lines = buddy.transcript();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].label(), "You: robots?");
        assert_eq!(lines[2].speaker, Speaker::Buddy);
        assert!(lines[2].text.starts_with("Robots are"));
    }

    #[test]
    fn test_suggestions_have_scripted_answers() {
        for question in SUGGESTIONS {
            assert_ne!(reply_to(question), FALLBACK, "{question}");
        }
    }
}
