//! The uniform technique record

/// One entry of the catalog.
///
/// Every field except `name` may be empty; the loader fills absent document
/// keys with empty strings and empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Technique {
    pub name: String,
    pub definition: String,
    /// Version/grouping tag of the subgroup the entry came from (e.g. "C++20")
    pub cpp_version: String,
    pub syntax: String,
    pub demo_code: String,
    pub expected_output: String,
    /// Bullet rendering of `use_cases`, kept in sync by [`Technique::set_use_cases`]
    usage: String,
    use_cases: Vec<String>,
    pub best_practices: Vec<String>,
    pub advantages: Vec<String>,
    pub notes: String,
    /// Demo-specific caveat; the loader never populates it
    pub demo_note: String,
}

impl Technique {
    pub fn new(name: impl Into<String>) -> Self {
        Technique {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Replace the use-case list and re-derive the prose usage string.
    pub fn set_use_cases(&mut self, use_cases: Vec<String>) {
        self.usage = bullet_join(&use_cases);
        self.use_cases = use_cases;
    }

    pub fn use_cases(&self) -> &[String] {
        &self.use_cases
    }

    /// Use cases as prose: `- a\n- b`, or empty when there are none.
    pub fn usage(&self) -> &str {
        &self.usage
    }
}

fn bullet_join(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("- {}", items.join("\n- "))
}
