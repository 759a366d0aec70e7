/// Lesson pane content state.
///
/// Tracks the displayed lesson and the topic currently being generated.
/// A new generation replaces the pane content only once it completes.
#[derive(Debug, Default)]
pub struct LessonState {
    text: Option<String>,
    topic: Option<String>,
    generating: Option<String>,
}

impl LessonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed lesson text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Topic of the displayed lesson.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating.is_some()
    }

    pub fn generating_topic(&self) -> Option<&str> {
        self.generating.as_deref()
    }

    /// Mark a generation as started for the given topic.
    pub fn begin(&mut self, topic: &str) {
        self.generating = Some(topic.to_string());
    }

    /// Install the finished lesson.
    pub fn complete(&mut self, text: String) {
        self.topic = self.generating.take().or_else(|| self.topic.clone());
        self.text = Some(text);
    }

    /// A generation ended without output (error or cancellation);
    /// keep whatever was displayed before.
    pub fn abort(&mut self) {
        self.generating = None;
    }

    /// Number of lines in the displayed lesson.
    pub fn line_count(&self) -> u32 {
        self.text
            .as_ref()
            .map(|t| t.lines().count() as u32)
            .unwrap_or(0)
    }
}
