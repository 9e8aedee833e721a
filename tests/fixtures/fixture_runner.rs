use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_fixtures};
use url_parts::UrlParts;

fn check(
    result: &mut FixtureResult,
    input: &str,
    field: &'static str,
    expected: &str,
    actual: &str,
) -> bool {
    if expected == actual {
        return true;
    }
    result.failures.push(FixtureFailure {
        input: input.to_string(),
        field,
        expected: expected.to_string(),
        actual: actual.to_string(),
    });
    false
}

pub fn run_fixtures(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();

    for case in cases {
        let TestCase::UrlTest {
            input,
            scheme,
            user,
            password,
            host,
            port,
            path,
            query,
            hash,
            href,
        } = case
        else {
            continue;
        };

        let url = UrlParts::parse(&input);
        let actual_query: Vec<(String, Vec<Option<String>>)> = url
            .query
            .iter()
            .map(|(key, values)| (key.to_string(), values.to_vec()))
            .collect();

        let mut ok = true;
        ok &= check(&mut result, &input, "scheme", &scheme, &url.scheme);
        ok &= check(&mut result, &input, "user", &user, &url.user);
        ok &= check(&mut result, &input, "password", &password, &url.password);
        ok &= check(&mut result, &input, "host", &host, &url.host);
        ok &= check(&mut result, &input, "port", &port, &url.port);
        ok &= check(&mut result, &input, "path", &path, &url.path);
        ok &= check(
            &mut result,
            &input,
            "query",
            &format!("{query:?}"),
            &format!("{actual_query:?}"),
        );
        ok &= check(&mut result, &input, "hash", &hash, &url.hash);
        ok &= check(&mut result, &input, "href", &href, &url.build());

        if ok {
            result.passed += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_fixtures() {
        let result = run_fixtures(load_fixtures());
        assert!(result.failures.is_empty(), "{}", result.summary());
        assert!(result.passed > 10);
    }
}
