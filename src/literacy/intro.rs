//! Read-only explainer pages for the AI corner.

pub const WHAT_IS_AI: &[&str] = &[
    "AI stands for Artificial Intelligence. It's technology that helps computers think a bit like humans!",
    "AI can learn from examples, recognize patterns, and make decisions on its own.",
    "Just like you learn by practicing and seeing examples, AI gets better by looking at lots of information!",
];

pub struct Ability {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABILITIES: &[Ability] = &[
    Ability {
        title: "Talk With You",
        description: "AI can have conversations, answer questions, and help with homework.",
    },
    Ability {
        title: "Create Art",
        description: "AI can make pictures, draw characters, and design cool stuff.",
    },
    Ability {
        title: "Make Music",
        description: "AI can compose songs, create beats, and help you make music.",
    },
    Ability {
        title: "Help You Code",
        description: "AI can help you learn to code and build awesome programs.",
    },
];

/// "How AI works" in four steps, in order.
pub const HOW_IT_WORKS: &[(&str, &str)] = &[
    ("Learning", "AI looks at lots of examples to learn patterns"),
    ("Thinking", "It uses what it learned to understand new information"),
    ("Creating", "It can make new things based on what it knows"),
    ("Improving", "It gets better over time with more examples"),
];

pub const CODING_EXAMPLE_TITLE: &str = "Simple Coding with AI Helper";

pub const CODING_EXAMPLE: &[&str] = &[
    "// This is a simple program that uses AI",
    "function makeRobotMove() {",
    "  if (obstacleAhead()) {",
    "    robot.turn(\"right\");",
    "  } else {",
    "    robot.moveForward();",
    "  }",
    "}",
];

pub const CODING_EXAMPLE_NOTE: &str = "With AI, you can teach a robot to make decisions! Above is a simple example of code that helps a robot navigate around obstacles.";

pub const LEARNING_TIPS: &[&str] = &[
    "Remember that AI is a tool created by humans to help us solve problems.",
    "Ask questions and experiment to discover what AI can do.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_abilities_and_steps() {
        assert_eq!(ABILITIES.len(), 4);
        let steps: Vec<&str> = HOW_IT_WORKS.iter().map(|(name, _)| *name).collect();
        assert_eq!(steps, ["Learning", "Thinking", "Creating", "Improving"]);
    }

    #[test]
    fn test_coding_example_braces_balance() {
        let code = CODING_EXAMPLE.concat();
        assert_eq!(code.matches('{').count(), code.matches('}').count());
        assert!(CODING_EXAMPLE[1].contains("makeRobotMove"));
    }

    #[test]
    fn test_intro_text_is_filled_in() {
        assert!(WHAT_IS_AI.iter().all(|p| !p.trim().is_empty()));
        assert!(ABILITIES.iter().all(|a| !a.description.is_empty()));
        assert!(!LEARNING_TIPS.is_empty());
    }
}
