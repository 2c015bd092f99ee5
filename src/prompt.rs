/// Build a prompt string with variable substitution.
///
/// Replaces `{text}` placeholders in the template with the input text.
pub fn render(template: &str, text: &str) -> String {
    template.replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let result = render("Classify: {text}\n\nCategory:", "hello");
        assert_eq!(result, "Classify: hello\n\nCategory:");
    }

    #[test]
    fn test_render_no_placeholder() {
        let result = render("static prompt", "ignored");
        assert_eq!(result, "static prompt");
    }

    #[test]
    fn test_render_multiple_occurrences() {
        let result = render("{text} and {text}", "x");
        assert_eq!(result, "x and x");
    }
}
