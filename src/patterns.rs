/*!
 * `.gitignore`-style pattern compilation and inherited rule sets
 */

use std::fs;
use std::path::Path;

use regex::Regex;

/// Name of the per-directory ignore file
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// A single compiled ignore pattern
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    /// Anchored matcher applied to an entry name
    regex: Regex,
    /// Leading `/`: applies only to the directory that declared it
    pub rooted: bool,
}

impl IgnoreRule {
    /// Compile one line of an ignore file.
    ///
    /// Returns `None` for blank lines, comments and patterns that do not
    /// compile.
    pub fn compile(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (body, rooted) = match line.strip_prefix('/') {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        // A trailing slash is dropped; the rule still matches by name
        let body = body.strip_suffix('/').unwrap_or(body);
        if body.is_empty() {
            return None;
        }

        let mut expr = String::with_capacity(body.len() + 8);
        expr.push('^');
        for c in body.chars() {
            match c {
                '*' => expr.push_str(".*"),
                '?' => expr.push('.'),
                other => expr.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
            }
        }
        expr.push('$');

        match Regex::new(&expr) {
            Ok(regex) => Some(Self { regex, rooted }),
            Err(e) => {
                tracing::warn!("Skipping ignore pattern {:?}: {}", line, e);
                None
            }
        }
    }

    /// Test an entry name against this rule
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Ordered rules in effect for one directory
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every usable line of an ignore file's contents
    pub fn parse(content: &str) -> Self {
        Self {
            rules: content.lines().filter_map(IgnoreRule::compile).collect(),
        }
    }

    /// Read `dir/.gitignore`; missing or unreadable files give an empty set
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(IGNORE_FILE_NAME);
        if !path.is_file() {
            return Self::new();
        }

        match fs::read_to_string(&path) {
            Ok(content) => {
                let set = Self::parse(&content);
                tracing::debug!("Loaded {} ignore rules from {}", set.len(), path.display());
                set
            }
            Err(e) => {
                tracing::debug!("Ignoring unreadable {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Build the set for a directory from its parent's inherited rules and
    /// the directory's own rules
    pub fn merged(inherited: &IgnoreRuleSet, local: IgnoreRuleSet) -> Self {
        let mut rules = Vec::with_capacity(inherited.rules.len() + local.rules.len());
        rules.extend(inherited.rules.iter().cloned());
        rules.extend(local.rules);
        Self { rules }
    }

    /// Rules that subdirectories inherit; rooted rules stay behind
    pub fn inheritable(&self) -> Self {
        Self {
            rules: self.rules.iter().filter(|r| !r.rooted).cloned().collect(),
        }
    }

    /// Whether any rule excludes the named entry
    pub fn is_ignored(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.matches(name))
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_lines() {
        let set = IgnoreRuleSet::parse("# comment\n\n   \n*.log\n");
        assert_eq!(set.len(), 1);
        assert!(set.is_ignored("app.log"));
        assert!(!set.is_ignored("# comment"));
    }

    #[test]
    fn wildcards_are_anchored() {
        let rule = IgnoreRule::compile("*.log").unwrap();
        assert!(rule.matches("debug.log"));
        assert!(!rule.matches("debug.log.bak"));

        let rule = IgnoreRule::compile("file?.txt").unwrap();
        assert!(rule.matches("file1.txt"));
        assert!(!rule.matches("file12.txt"));
        assert!(!rule.matches("file1Xtxt"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let rule = IgnoreRule::compile("a+b(1).txt").unwrap();
        assert!(rule.matches("a+b(1).txt"));
        assert!(!rule.matches("aab1.txt"));
    }

    #[test]
    fn slashes_are_stripped() {
        let rule = IgnoreRule::compile("/build/").unwrap();
        assert!(rule.rooted);
        assert!(rule.matches("build"));

        let rule = IgnoreRule::compile("cache/").unwrap();
        assert!(!rule.rooted);
        assert!(rule.matches("cache"));
        assert!(!rule.matches("cache/"));
    }

    #[test]
    fn rooted_rules_are_not_inherited() {
        let set = IgnoreRuleSet::parse("/local.txt\nglobal.txt\n");
        let child = IgnoreRuleSet::merged(&set.inheritable(), IgnoreRuleSet::parse("extra"));
        assert!(!child.is_ignored("local.txt"));
        assert!(child.is_ignored("global.txt"));
        assert!(child.is_ignored("extra"));
    }

    #[test]
    fn missing_ignore_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(IgnoreRuleSet::load(dir.path()).is_empty());
    }
}
