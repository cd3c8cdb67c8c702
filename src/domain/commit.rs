use regex::Regex;

/// A commit attributed to a single module, parsed into conventional parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub r#type: String,
    pub scope: Option<String>,
    pub subject: String,
    pub body: Option<String>,
    pub breaking: bool,
}

impl Commit {
    /// Parse a commit message according to conventional commits spec
    /// Supports formats:
    /// - type(scope)!: subject
    /// - type(scope): subject
    /// - type!: subject
    /// - type: subject
    /// - non-conventional text (falls back to type "chore")
    pub fn parse(hash: impl Into<String>, message: &str) -> Self {
        let (header, body) = split_body(message);
        let body_breaking = has_breaking_footer(message);

        // Try format: type(scope)!: subject
        if let Some(captures) = Regex::new(r"^([a-z]+)\(([^)]+)\)(!?):\s*(.*)")
            .ok()
            .and_then(|re| re.captures(header))
        {
            let r#type = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let scope = captures.get(2).map(|m| m.as_str().to_string());
            let has_exclamation = captures.get(3).map(|m| m.as_str()) == Some("!");
            let subject = captures
                .get(4)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return Commit {
                hash: hash.into(),
                r#type,
                scope,
                subject,
                body,
                breaking: has_exclamation || body_breaking,
            };
        }

        // Try format: type!: subject
        if let Some(captures) = Regex::new(r"^([a-z]+)!:\s*(.*)")
            .ok()
            .and_then(|re| re.captures(header))
        {
            let r#type = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let subject = captures
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return Commit {
                hash: hash.into(),
                r#type,
                scope: None,
                subject,
                body,
                breaking: true,
            };
        }

        // Try format: type: subject
        if let Some(captures) = Regex::new(r"^([a-z]+):\s*(.*)")
            .ok()
            .and_then(|re| re.captures(header))
        {
            let r#type = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let subject = captures
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return Commit {
                hash: hash.into(),
                r#type,
                scope: None,
                subject,
                body,
                breaking: body_breaking,
            };
        }

        // Default: non-conventional commit
        Commit {
            hash: hash.into(),
            r#type: "chore".to_string(),
            scope: None,
            subject: header.to_string(),
            body,
            breaking: body_breaking,
        }
    }
}

/// Split a commit message into its header line and optional body
fn split_body(message: &str) -> (&str, Option<String>) {
    match message.split_once('\n') {
        Some((header, rest)) => {
            let body = rest.trim();
            if body.is_empty() {
                (header.trim_end(), None)
            } else {
                (header.trim_end(), Some(body.to_string()))
            }
        }
        None => (message, None),
    }
}

fn has_breaking_footer(message: &str) -> bool {
    message.contains("BREAKING CHANGE:") || message.contains("BREAKING-CHANGE:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope() {
        let commit = Commit::parse("abc123", "feat(auth): add login");
        assert_eq!(commit.r#type, "feat");
        assert_eq!(commit.scope, Some("auth".to_string()));
        assert_eq!(commit.subject, "add login");
        assert!(!commit.breaking);
    }

    #[test]
    fn test_parse_with_breaking_marker() {
        let commit = Commit::parse("abc123", "feat(auth)!: redesign login");
        assert_eq!(commit.r#type, "feat");
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let commit = Commit::parse("abc123", "feat!: redesign");
        assert_eq!(commit.r#type, "feat");
        assert_eq!(commit.scope, None);
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_non_conventional() {
        let commit = Commit::parse("abc123", "Random commit message");
        assert_eq!(commit.r#type, "chore");
        assert_eq!(commit.subject, "Random commit message");
        assert!(!commit.breaking);
    }

    #[test]
    fn test_parse_breaking_change_footer() {
        let commit = Commit::parse("abc123", "fix: something\n\nBREAKING CHANGE: desc");
        assert!(commit.breaking);
        assert_eq!(commit.body, Some("BREAKING CHANGE: desc".to_string()));
    }

    #[test]
    fn test_parse_breaking_change_hyphenated_footer() {
        let commit = Commit::parse("abc123", "fix: something\n\nBREAKING-CHANGE: desc");
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_body_extraction() {
        let commit = Commit::parse("abc123", "feat: thing\n\nlonger explanation\nsecond line");
        assert_eq!(
            commit.body,
            Some("longer explanation\nsecond line".to_string())
        );
    }

    #[test]
    fn test_parse_no_body() {
        let commit = Commit::parse("abc123", "fix: oneliner\n");
        assert_eq!(commit.body, None);
        assert_eq!(commit.subject, "oneliner");
    }
}
