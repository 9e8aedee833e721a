/// Fixture loader for data-driven `UrlParts` tests
///
/// Each fixture lists the expected parts of one input and the string it
/// rebuilds to. Omitted parts are expected to be empty.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        #[serde(default)]
        scheme: String,
        #[serde(default)]
        user: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        host: String,
        #[serde(default)]
        port: String,
        #[serde(default)]
        path: String,
        #[serde(default)]
        query: Vec<(String, Vec<Option<String>>)>,
        #[serde(default)]
        hash: String,
        href: String,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} passed, {} failed",
            self.passed,
            self.failures.len()
        );
        for failure in &self.failures {
            out.push_str(&format!(
                "\n  {:?}: {} expected {:?}, got {:?}",
                failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        out
    }
}

pub fn load_fixtures() -> Vec<TestCase> {
    serde_json::from_str(include_str!("url_parts.json")).expect("fixture file should be valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixtures() {
        let cases = load_fixtures();
        let urls = cases
            .iter()
            .filter(|case| matches!(case, TestCase::UrlTest { .. }))
            .count();
        assert!(urls > 10);
    }
}
