use std::ops::Range;
use std::sync::LazyLock;

use bomalign_core::Coordinate;
use regex::Regex;

// A dependency declaration: delimiter, optional quote, group:artifact:version,
// closing quote or paren. The version must lead with a digit so plugin ids and
// property references never match.
static DEPENDENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\s(]['"]?([^\s'"():]+):([^\s'"():]+):(\d[^\s'"()]*)['")]"#)
        .expect("hardcoded regex must compile")
});

/// A dependency coordinate found on a line, with the byte span of its version.
///
/// The span anchors the substitution to the matched position, so other
/// occurrences of the same version substring on the line are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub coordinate: Coordinate,
    pub version_span: Range<usize>,
}

/// Recognize a `group:artifact:version` declaration on a single line.
///
/// Lines without a colon are rejected before the regex runs. Only the first
/// match on a line counts; a line is rewritten at most once per pass.
#[must_use]
pub fn match_dependency(line: &str) -> Option<LineMatch> {
    if !line.contains(':') {
        return None;
    }
    let caps = DEPENDENCY_PATTERN.captures(line)?;
    let version = caps.get(3)?;
    Some(LineMatch {
        coordinate: Coordinate::new(
            caps[1].to_string(),
            caps[2].to_string(),
            version.as_str().to_string(),
        ),
        version_span: version.range(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "    implementation 'com.acme:widget:1.0.0'",
        "com.acme",
        "widget",
        "1.0.0"
    )]
    #[case(
        r#"    implementation("com.acme:widget:1.0.0")"#,
        "com.acme",
        "widget",
        "1.0.0"
    )]
    #[case(
        r#"    classpath "org.springframework.boot:spring-boot-gradle-plugin:2.7.18""#,
        "org.springframework.boot",
        "spring-boot-gradle-plugin",
        "2.7.18"
    )]
    #[case(
        "    testImplementation 'org.mockito:mockito-core:4.11.0-SNAPSHOT'",
        "org.mockito",
        "mockito-core",
        "4.11.0-SNAPSHOT"
    )]
    fn test_match_dependency_forms(
        #[case] line: &str,
        #[case] group: &str,
        #[case] artifact: &str,
        #[case] version: &str,
    ) {
        let found = match_dependency(line).unwrap();
        assert_eq!(found.coordinate.group, group);
        assert_eq!(found.coordinate.artifact, artifact);
        assert_eq!(found.coordinate.version, version);
        assert_eq!(&line[found.version_span.clone()], version);
    }

    #[rstest]
    #[case("plugins {")]
    #[case("apply plugin: 'java'")]
    #[case("    implementation project(':shared')")]
    #[case("    implementation 'com.acme:widget:$acmeVersion'")]
    #[case("version = '1.0.0'")]
    #[case("")]
    fn test_match_dependency_rejects(#[case] line: &str) {
        assert_eq!(match_dependency(line), None);
    }

    #[test]
    fn test_version_span_points_at_declaration_not_comment() {
        let line = "    implementation 'com.acme:widget:1.0.0' // pin to 1.0.0";
        let found = match_dependency(line).unwrap();
        assert_eq!(found.version_span, 36..41);
    }
}
