//! Template Generator — canned boilerplate served when the completion API is
//! not configured or fails.
//!
//! Only four languages have their own template; every other language shares
//! the JavaScript one. The prompt is inserted verbatim, without escaping, into
//! a leading comment and into the string the generated code returns.

use crate::generation::language::Language;

/// The four distinct template shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    JavaScript,
    Python,
    React,
    Html,
}

impl From<Language> for Template {
    fn from(language: Language) -> Self {
        match language {
            Language::Python => Template::Python,
            Language::React => Template::React,
            Language::Html => Template::Html,
            Language::JavaScript
            | Language::Css
            | Language::Java
            | Language::Cpp
            | Language::CSharp
            | Language::Php
            | Language::Ruby
            | Language::Go
            | Language::Rust => Template::JavaScript,
        }
    }
}

impl Template {
    /// Template for a raw language key; unrecognised keys get the default.
    pub fn for_key(key: &str) -> Self {
        Language::from_key(key).unwrap_or_default().into()
    }

    pub fn render(self, prompt: &str) -> String {
        match self {
            Template::JavaScript => format!(
                r#"// {prompt}
function example() {{
    console.log("Hello, World!");
    return "Generated code based on: {prompt}";
}}

// Usage
const result = example();
console.log(result);"#
            ),
            Template::Python => format!(
                r#"# {prompt}
def example():
    print("Hello, World!")
    return "Generated code based on: {prompt}"

# Usage
if __name__ == "__main__":
    result = example()
    print(result)"#
            ),
            Template::React => format!(
                r#"// {prompt}
import React, {{ useState }} from 'react';

const ExampleComponent = () => {{
    const [message, setMessage] = useState('Hello, World!');

    return (
        <div>
            <h1>{{message}}</h1>
            <p>Generated code based on: {prompt}</p>
        </div>
    );
}};

export default ExampleComponent;"#
            ),
            Template::Html => format!(
                r#"<!-- {prompt} -->
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Generated Code</title>
</head>
<body>
    <h1>Hello, World!</h1>
    <p>Generated code based on: {prompt}</p>
</body>
</html>"#
            ),
        }
    }
}

/// Boilerplate code for `(prompt, language)`. Pure and deterministic.
pub fn generate_template(prompt: &str, language: &str) -> String {
    Template::for_key(language).render(prompt)
}
