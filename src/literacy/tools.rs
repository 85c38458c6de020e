pub struct AiTool {
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
}

pub const AI_TOOLS: &[AiTool] = &[
    AiTool {
        name: "Claude",
        description: "Claude is great at understanding and writing text. It's really helpful for homework, creative writing, and learning to code!",
        strengths: &["Writing stories", "Explaining things", "Coding help", "Answering questions"],
    },
    AiTool {
        name: "Perplexity",
        description: "Perplexity is like a super-powered search engine. It doesn't just find information, it summarizes it for you!",
        strengths: &["Finding facts", "Research", "Summarizing information", "Citing sources"],
    },
    AiTool {
        name: "Midjourney",
        description: "Midjourney creates amazing pictures from your descriptions. Just tell it what you want to see!",
        strengths: &["Creating art", "Illustrating stories", "Design ideas", "Visualizing concepts"],
    },
    AiTool {
        name: "Scratch + AI",
        description: "Scratch with AI helps you learn to code by making games and animations with blocks. It's super fun!",
        strengths: &["Learning to code", "Making games", "Creating animations", "Solving puzzles"],
    },
];
