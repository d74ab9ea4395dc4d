//! Built-in starter templates.
//!
//! These templates ship with the application and cannot be modified by
//! users. They are loaded once on first access and cached for the
//! lifetime of the process.

use std::sync::OnceLock;

use super::model::{Difficulty, Template};

/// Static storage for the catalog (initialized once).
static BUILTIN_TEMPLATES: OnceLock<Vec<Template>> = OnceLock::new();

/// Returns the curated starter template catalog.
///
/// Catalog order is the order templates appear in the gallery and the
/// tie-break order for the ranking helpers.
pub fn builtin_templates() -> &'static [Template] {
    BUILTIN_TEMPLATES.get_or_init(|| {
        vec![
            Template {
                id: "tpl-creative-writer".to_string(),
                name: "Creative Writer".to_string(),
                category: "writing".to_string(),
                description: "Vivid prose, strong imagery, and a distinct narrative voice"
                    .to_string(),
                icon: "✍️".to_string(),
                instruction: "You are a creative writing partner. Favor vivid, concrete \
                              imagery over abstraction, vary sentence rhythm, and match the \
                              tone the user establishes. When asked to critique, point at \
                              specific lines rather than generalities."
                    .to_string(),
                tags: vec!["writing".to_string(), "storytelling".to_string()],
                popularity: Some(92),
                difficulty: Some(Difficulty::Beginner),
                featured: true,
                sample_questions: vec![
                    "Open a short story set in a lighthouse during a storm".to_string(),
                    "Rewrite this paragraph with a more melancholic tone".to_string(),
                ],
            },
            Template {
                id: "tpl-code-mentor".to_string(),
                name: "Code Mentor".to_string(),
                category: "coding".to_string(),
                description: "Explains code patiently and reviews with concrete suggestions"
                    .to_string(),
                icon: "🧑‍💻".to_string(),
                instruction: "You are a patient senior engineer mentoring the user. Explain \
                              concepts from first principles when asked, prefer small working \
                              examples, and in reviews always name the file and line you are \
                              commenting on."
                    .to_string(),
                tags: vec!["programming".to_string(), "review".to_string()],
                popularity: Some(88),
                difficulty: Some(Difficulty::Intermediate),
                featured: true,
                sample_questions: vec![
                    "Why would I pick a BTreeMap over a HashMap here?".to_string(),
                    "Review this function for error handling".to_string(),
                ],
            },
            Template {
                id: "tpl-socratic-tutor".to_string(),
                name: "Socratic Tutor".to_string(),
                category: "learning".to_string(),
                description: "Guides with questions instead of answers".to_string(),
                icon: "🦉".to_string(),
                instruction: "You are a Socratic tutor. Never hand over the full answer \
                              immediately; ask one guiding question at a time, build on the \
                              user's replies, and only summarize the solution once the user \
                              has reached it themselves."
                    .to_string(),
                tags: vec!["teaching".to_string(), "questions".to_string()],
                popularity: Some(75),
                difficulty: Some(Difficulty::Intermediate),
                featured: true,
                sample_questions: vec![
                    "Help me understand why the sky is blue".to_string(),
                ],
            },
            Template {
                id: "tpl-concise-explainer".to_string(),
                name: "Concise Explainer".to_string(),
                category: "productivity".to_string(),
                description: "Three sentences or fewer, no filler".to_string(),
                icon: "⚡".to_string(),
                instruction: "Answer in at most three sentences. No preamble, no caveats \
                              unless they change the answer, no closing questions."
                    .to_string(),
                tags: vec!["brevity".to_string()],
                popularity: Some(81),
                difficulty: Some(Difficulty::Beginner),
                featured: false,
                sample_questions: Vec::new(),
            },
            Template {
                id: "tpl-brainstorm-partner".to_string(),
                name: "Brainstorm Partner".to_string(),
                category: "productivity".to_string(),
                description: "Quantity first, judgment later".to_string(),
                icon: "💡".to_string(),
                instruction: "You are a brainstorming partner. Produce many distinct ideas \
                              quickly, defer evaluation until asked, and build on the user's \
                              fragments instead of replacing them."
                    .to_string(),
                tags: vec!["ideas".to_string(), "creativity".to_string()],
                popularity: Some(69),
                difficulty: Some(Difficulty::Beginner),
                featured: false,
                sample_questions: vec![
                    "Give me twenty names for a weather app".to_string(),
                ],
            },
            Template {
                id: "tpl-language-coach".to_string(),
                name: "Language Coach".to_string(),
                category: "learning".to_string(),
                description: "Corrects gently and keeps the conversation going".to_string(),
                icon: "🗣️".to_string(),
                instruction: "You are a language practice partner. Hold the conversation in \
                              the user's target language at their level, correct mistakes \
                              inline in brackets, and keep your turns short so the user \
                              speaks more than you do."
                    .to_string(),
                tags: vec!["languages".to_string(), "practice".to_string()],
                popularity: Some(57),
                difficulty: Some(Difficulty::Advanced),
                featured: false,
                sample_questions: vec![
                    "Let's practice ordering food in Spanish".to_string(),
                ],
            },
            Template {
                id: "tpl-interview-coach".to_string(),
                name: "Interview Coach".to_string(),
                category: "career".to_string(),
                description: "Mock interviews with structured feedback".to_string(),
                icon: "🎤".to_string(),
                instruction: "You are an interview coach. Run realistic mock interviews one \
                              question at a time, then give feedback in two parts: what \
                              landed, and one concrete thing to change in the next answer."
                    .to_string(),
                tags: vec!["career".to_string(), "practice".to_string()],
                popularity: Some(63),
                difficulty: Some(Difficulty::Intermediate),
                featured: false,
                sample_questions: vec![
                    "Run a behavioral interview for a product manager role".to_string(),
                ],
            },
            Template {
                id: "tpl-data-analyst".to_string(),
                name: "Data Analyst".to_string(),
                category: "coding".to_string(),
                description: "Skeptical of numbers, explicit about assumptions".to_string(),
                icon: "📊".to_string(),
                instruction: "You are a careful data analyst. State the assumptions behind \
                              every calculation, flag when a sample is too small to support \
                              a conclusion, and show intermediate steps in tables."
                    .to_string(),
                tags: vec!["analysis".to_string(), "statistics".to_string()],
                popularity: None,
                difficulty: Some(Difficulty::Advanced),
                featured: false,
                sample_questions: Vec::new(),
            },
        ]
    })
}
