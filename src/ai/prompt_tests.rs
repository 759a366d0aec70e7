use super::*;

#[test]
fn test_kind_cycle_covers_all_kinds() {
    let start = LessonKind::Explain;
    assert_eq!(start.cycle(), LessonKind::Code);
    assert_eq!(start.cycle().cycle(), LessonKind::AudioScript);
    assert_eq!(start.cycle().cycle().cycle(), start);
}

#[test]
fn test_history_tags() {
    assert_eq!(LessonKind::Explain.history_tag(), "text");
    assert_eq!(LessonKind::Code.history_tag(), "code");
    assert_eq!(LessonKind::AudioScript.history_tag(), "audio");
}

#[test]
fn test_explanation_prompt_includes_topic_and_depth() {
    let prompt = build_explanation_prompt("gradient descent", Depth::Brief);
    assert!(prompt.contains("**Topic:** gradient descent"));
    assert!(prompt.contains("**Depth Level:** brief"));
    assert!(prompt.contains("2-3 paragraph"));
    assert!(prompt.contains("Markdown"));
}

#[test]
fn test_comprehensive_depth_lists_sections() {
    let prompt = build_explanation_prompt("PCA", Depth::Comprehensive);
    assert!(prompt.contains("Mathematical foundations"));
    assert!(prompt.contains("Advantages and limitations"));
}

#[test]
fn test_code_prompt_includes_complexity() {
    let prompt = build_code_prompt("k-means", Complexity::Advanced);
    assert!(prompt.contains("**Complexity:** advanced"));
    assert!(prompt.contains("Production-ready"));
    assert!(prompt.contains("runnable Python code"));
}

#[test]
fn test_audio_prompt_avoids_visual_framing() {
    let prompt = build_audio_script_prompt("dropout");
    assert!(prompt.contains("**Topic:** dropout"));
    assert!(prompt.contains("spoken"));
    assert!(prompt.contains("Avoid visual references"));
}

#[test]
fn test_build_prompt_dispatches_by_kind() {
    let explain = build_prompt(
        LessonKind::Explain,
        "svm",
        Depth::Brief,
        Complexity::Basic,
    );
    let code = build_prompt(LessonKind::Code, "svm", Depth::Brief, Complexity::Basic);

    assert!(explain.contains("educator"));
    assert!(code.contains("Python developer"));
}

#[test]
fn test_strip_code_fences_python() {
    let fenced = "```python\nprint('hi')\n```";
    assert_eq!(strip_code_fences(fenced), "print('hi')");
}

#[test]
fn test_strip_code_fences_plain() {
    let fenced = "```\nx = 1\n```";
    assert_eq!(strip_code_fences(fenced), "x = 1");
}

#[test]
fn test_strip_code_fences_unfenced_passthrough() {
    assert_eq!(strip_code_fences("x = 1\n"), "x = 1");
}
