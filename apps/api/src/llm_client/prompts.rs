// Prompt fragments for the code generation call.

/// System instruction for code generation. Replace `{language}` before sending.
pub const CODE_GENERATION_SYSTEM_TEMPLATE: &str = "You are a helpful coding assistant. \
    Generate clean, well-commented code based on the user's prompt. \
    Use {language} programming language. \
    Only return the code without any explanations or markdown formatting.";

/// The raw language key is used as given, so unlisted languages still reach the model.
pub fn code_generation_system(language: &str) -> String {
    CODE_GENERATION_SYSTEM_TEMPLATE.replace("{language}", language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_language() {
        let system = code_generation_system("python");
        assert!(system.contains("Use python programming language."));
        assert!(system.contains("Only return the code"));
        assert!(!system.contains("{language}"));
    }
}
