mod events;
mod input_state;
mod lesson_state;
mod mouse;
mod render;
mod state;

// Re-export public types
pub use input_state::InputState;
pub use lesson_state::LessonState;
pub use state::{App, Focus, PendingLesson};

#[cfg(test)]
pub mod test_support;
