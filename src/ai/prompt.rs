//! Lesson kinds and prompt template generation
//!
//! Builds prose prompts for the Gemini API per lesson kind. The instructions
//! mirror the original GyanGuru service prompts.

/// What kind of lesson to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonKind {
    /// Markdown explanation of a topic
    #[default]
    Explain,
    /// Runnable Python example
    Code,
    /// Conversational script suitable for text-to-speech
    AudioScript,
}

impl LessonKind {
    pub fn cycle(self) -> Self {
        match self {
            LessonKind::Explain => LessonKind::Code,
            LessonKind::Code => LessonKind::AudioScript,
            LessonKind::AudioScript => LessonKind::Explain,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LessonKind::Explain => "Explain",
            LessonKind::Code => "Code",
            LessonKind::AudioScript => "Audio script",
        }
    }

    /// Category tag recorded in history entries
    pub fn history_tag(self) -> &'static str {
        match self {
            LessonKind::Explain => "text",
            LessonKind::Code => "code",
            LessonKind::AudioScript => "audio",
        }
    }
}

/// Level of detail for explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    Brief,
    Intermediate,
    #[default]
    Comprehensive,
}

impl Depth {
    pub fn cycle(self) -> Self {
        match self {
            Depth::Brief => Depth::Intermediate,
            Depth::Intermediate => Depth::Comprehensive,
            Depth::Comprehensive => Depth::Brief,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Depth::Brief => "brief",
            Depth::Intermediate => "intermediate",
            Depth::Comprehensive => "comprehensive",
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            Depth::Brief => "Provide a concise 2-3 paragraph explanation suitable for quick reference.",
            Depth::Intermediate => {
                "Provide a moderate explanation with key concepts, examples, and use cases in 4-6 paragraphs."
            }
            Depth::Comprehensive => {
                "Provide an in-depth explanation covering:\n\
                 1. Introduction and definition\n\
                 2. Mathematical foundations (with LaTeX notation where appropriate)\n\
                 3. How it works step-by-step\n\
                 4. Key components/variants\n\
                 5. Practical applications\n\
                 6. Advantages and limitations\n\
                 7. Related concepts"
            }
        }
    }
}

/// Sophistication of generated code examples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Complexity {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn cycle(self) -> Self {
        match self {
            Complexity::Basic => Complexity::Intermediate,
            Complexity::Intermediate => Complexity::Advanced,
            Complexity::Advanced => Complexity::Basic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            Complexity::Basic => {
                "Simple implementation with minimal dependencies, focusing on core concept."
            }
            Complexity::Intermediate => {
                "Complete implementation with proper structure, comments, and visualization."
            }
            Complexity::Advanced => {
                "Production-ready code with error handling, optimization, and comprehensive documentation."
            }
        }
    }
}

/// Build the prompt for the given lesson kind.
pub fn build_prompt(kind: LessonKind, topic: &str, depth: Depth, complexity: Complexity) -> String {
    match kind {
        LessonKind::Explain => build_explanation_prompt(topic, depth),
        LessonKind::Code => build_code_prompt(topic, complexity),
        LessonKind::AudioScript => build_audio_script_prompt(topic),
    }
}

/// Build a prompt for an educational Markdown explanation.
pub fn build_explanation_prompt(topic: &str, depth: Depth) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an expert Machine Learning educator. Generate a clear, educational explanation about:\n\n",
    );
    prompt.push_str(&format!("**Topic:** {}\n\n", topic));
    prompt.push_str(&format!("**Depth Level:** {}\n", depth.label()));
    prompt.push_str(depth.instructions());
    prompt.push_str("\n\nFormat your response in clean Markdown with:\n");
    prompt.push_str("- Clear section headers using ##\n");
    prompt.push_str("- Code snippets where relevant (use ```python)\n");
    prompt.push_str("- Mathematical expressions where appropriate\n");
    prompt.push_str("- Bullet points for lists\n");
    prompt.push_str("- Bold for key terms\n\n");
    prompt.push_str(
        "Make the content accessible yet technically accurate. Use analogies where helpful.",
    );

    prompt
}

/// Build a prompt for a runnable Python implementation.
pub fn build_code_prompt(topic: &str, complexity: Complexity) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an expert Python developer specializing in Machine Learning. Generate working Python code for:\n\n",
    );
    prompt.push_str(&format!("**Topic:** {}\n\n", topic));
    prompt.push_str(&format!("**Complexity:** {}\n", complexity.label()));
    prompt.push_str(complexity.instructions());
    prompt.push_str("\n\nRequirements:\n");
    prompt.push_str("1. Write complete, runnable Python code\n");
    prompt.push_str("2. Include detailed comments explaining each section\n");
    prompt.push_str("3. Add docstrings for functions/classes\n");
    prompt.push_str("4. Include example usage with sample data\n");
    prompt.push_str("5. Add visualization where appropriate (matplotlib/seaborn)\n");
    prompt.push_str("6. Print meaningful output to demonstrate functionality\n\n");
    prompt.push_str(
        "Return ONLY the Python code without any markdown formatting or explanation outside the code.",
    );

    prompt
}

/// Build a prompt for a conversational, TTS-ready lesson script.
pub fn build_audio_script_prompt(topic: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are creating an educational audio lesson about Machine Learning. Generate a conversational, spoken explanation about:\n\n",
    );
    prompt.push_str(&format!("**Topic:** {}\n\n", topic));
    prompt.push_str("Requirements:\n");
    prompt.push_str("1. Write as if speaking to a student - natural, conversational tone\n");
    prompt.push_str("2. Avoid visual references (no \"as you can see\", \"in the diagram\")\n");
    prompt.push_str("3. Use clear transitions between ideas\n");
    prompt.push_str("4. Explain complex terms when first introduced\n");
    prompt.push_str("5. Target length: 3-5 minutes of speaking time (roughly 500-800 words)\n\n");
    prompt.push_str("Write ONLY the spoken script without stage directions or formatting.");

    prompt
}

/// Strip a wrapping Markdown code fence from a code response.
///
/// The API is asked for bare code but often fences it anyway.
pub fn strip_code_fences(text: &str) -> String {
    let mut code = text.trim();

    if let Some(rest) = code.strip_prefix("```python") {
        code = rest;
    } else if let Some(rest) = code.strip_prefix("```") {
        code = rest;
    }
    if let Some(rest) = code.strip_suffix("```") {
        code = rest;
    }

    code.trim().to_string()
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
