//! Key-name case conversion between camel, pascal, snake, and kebab styles

/// Target case style for key renaming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// lowerCamelCase
    Camel,
    /// UpperCamelCase
    Pascal,
    /// lower_snake_case
    Snake,
    /// lower-kebab-case
    Kebab,
}

impl CaseStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            "snake" => Ok(CaseStyle::Snake),
            "kebab" => Ok(CaseStyle::Kebab),
            other => Err(format!(
                "Unknown case style '{}'. Use 'camel', 'pascal', 'snake', or 'kebab'",
                other
            )),
        }
    }
}

/// Convert a name into the requested case style.
///
/// The name is tokenized on whitespace, underscores, and hyphens, with an
/// additional split before every uppercase letter, so both `fooBar` and
/// `foo_bar` tokenize to `["foo", "bar"]`. Empty input produces empty output.
pub fn convert_case(name: &str, style: CaseStyle) -> String {
    let words = split_words(name);

    match style {
        CaseStyle::Camel => words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.clone()
                } else {
                    capitalize(word)
                }
            })
            .collect(),
        CaseStyle::Pascal => words.iter().map(|word| capitalize(word)).collect(),
        CaseStyle::Snake => words.join("_"),
        CaseStyle::Kebab => words.join("-"),
    }
}

/// Split a name into lowercase word tokens.
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in name.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(ch.to_lowercase());
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
