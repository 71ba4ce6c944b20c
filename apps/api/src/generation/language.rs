//! Target languages offered by the generator, with their display labels and
//! download file extensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language used when a request omits one or sends an empty string.
pub const DEFAULT_LANGUAGE_KEY: &str = "javascript";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    Python,
    React,
    Html,
    Css,
    Java,
    Cpp,
    CSharp,
    Php,
    Ruby,
    Go,
    Rust,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::JavaScript,
        Language::Python,
        Language::React,
        Language::Html,
        Language::Css,
        Language::Java,
        Language::Cpp,
        Language::CSharp,
        Language::Php,
        Language::Ruby,
        Language::Go,
        Language::Rust,
    ];

    /// Wire key, as sent in `GenerationRequest.language`.
    pub fn key(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::React => "react",
            Language::Html => "html",
            Language::Css => "css",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::React => "React JSX",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::Rust => "Rust",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::React => "jsx",
            Language::Html => "html",
            Language::Css => "css",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
            Language::Php => "php",
            Language::Ruby => "rb",
            Language::Go => "go",
            Language::Rust => "rs",
        }
    }

    /// Exact, case-sensitive lookup of a wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.key() == key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Display label for a raw key; unknown keys are shown as-is.
pub fn label_for(key: &str) -> &str {
    Language::from_key(key).map(Language::label).unwrap_or(key)
}

/// File extension for a raw key; unknown keys download as plain text.
pub fn extension_for(key: &str) -> &'static str {
    Language::from_key(key)
        .map(Language::extension)
        .unwrap_or("txt")
}
