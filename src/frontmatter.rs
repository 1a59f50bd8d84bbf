//! Front-matter boundary for note documents
//!
//! Handles extraction and rewriting of YAML frontmatter in Markdown notes.
//! Selections live under the `fourPillars` key, one entry per selector id,
//! and every unrelated frontmatter key survives a rewrite untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SizhuError, SizhuResult};
use crate::pillars::FourPillars;

/// Delimiter for frontmatter sections
const FRONTMATTER_DELIMITER: &str = "---";

/// Result of extracting frontmatter from content
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFrontmatter {
    /// The raw YAML content of the frontmatter
    pub yaml: String,
    /// The content body after the frontmatter
    pub body: String,
    /// Line number where frontmatter ends (for error reporting)
    pub end_line: usize,
}

/// Extract frontmatter from note content
///
/// Frontmatter must be at the start of the content, delimited by `---` lines.
///
/// # Example
/// ```text
/// ---
/// fourPillars:
///   default:
///     年: {天干: 甲, 地支: 子}
/// ---
/// Note body here
/// ```
pub fn extract_frontmatter(content: &str) -> SizhuResult<ExtractedFrontmatter> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.is_empty() || lines[0].trim() != FRONTMATTER_DELIMITER {
        return Err(SizhuError::NoFrontmatter);
    }

    let mut closing_line: Option<usize> = None;
    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.trim() == FRONTMATTER_DELIMITER {
            closing_line = Some(i);
            break;
        }
    }

    let closing_line = closing_line.ok_or(SizhuError::UnclosedFrontmatter)?;

    let yaml = lines[1..closing_line].join("\n");

    let body = if closing_line + 1 < lines.len() {
        lines[closing_line + 1..].join("\n")
    } else {
        String::new()
    };

    Ok(ExtractedFrontmatter {
        yaml,
        body,
        end_line: closing_line + 1, // 1-indexed line number
    })
}

/// Frontmatter of a note carrying four-pillar selections
///
/// Foreign keys are kept verbatim so rewriting a note never loses metadata
/// the host or other tools put there.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoteFrontmatter {
    /// Selections keyed by selector id
    #[serde(
        rename = "fourPillars",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub four_pillars: BTreeMap<String, FourPillars>,

    /// Every other frontmatter key, preserved as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Parse frontmatter YAML into [`NoteFrontmatter`]
pub fn parse_note_frontmatter(yaml: &str) -> SizhuResult<NoteFrontmatter> {
    if yaml.trim().is_empty() {
        return Ok(NoteFrontmatter::default());
    }
    Ok(serde_yaml_ng::from_str(yaml)?)
}

/// Read the selection stored under `selector_id`, if any.
///
/// Content without frontmatter simply has no selection; malformed YAML is an
/// error.
pub fn load_selection(content: &str, selector_id: &str) -> SizhuResult<Option<FourPillars>> {
    let extracted = match extract_frontmatter(content) {
        Ok(extracted) => extracted,
        Err(SizhuError::NoFrontmatter) => return Ok(None),
        Err(err) => return Err(err),
    };
    let note = parse_note_frontmatter(&extracted.yaml)?;
    Ok(note.four_pillars.get(selector_id).copied())
}

/// Write `pillars` under `selector_id`, returning the rewritten content.
///
/// Replaces an existing frontmatter block or prepends a new one. The body
/// and all foreign frontmatter keys are preserved.
pub fn upsert_selection(
    content: &str,
    selector_id: &str,
    pillars: &FourPillars,
) -> SizhuResult<String> {
    let (mut note, body) = match extract_frontmatter(content) {
        Ok(extracted) => (parse_note_frontmatter(&extracted.yaml)?, extracted.body),
        Err(SizhuError::NoFrontmatter) => (NoteFrontmatter::default(), content.to_string()),
        Err(err) => return Err(err),
    };

    note.four_pillars.insert(selector_id.to_string(), *pillars);

    let yaml = serde_yaml_ng::to_string(&note)?;
    Ok(format!(
        "{FRONTMATTER_DELIMITER}\n{yaml}{FRONTMATTER_DELIMITER}\n{body}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::{Branch, Stem};
    use crate::pillars::Pillar;

    #[test]
    fn test_extract_frontmatter_simple() {
        let content = "---\ntitle: Chart notes\n---\nBody here";
        let result = extract_frontmatter(content).unwrap();

        assert_eq!(result.yaml, "title: Chart notes");
        assert_eq!(result.body, "Body here");
        assert_eq!(result.end_line, 3);
    }

    #[test]
    fn test_extract_frontmatter_empty_body() {
        let content = "---\ntitle: Minimal\n---";
        let result = extract_frontmatter(content).unwrap();

        assert_eq!(result.yaml, "title: Minimal");
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_extract_frontmatter_missing_opening() {
        let content = "title: No delimiters\n---\nBody";
        let result = extract_frontmatter(content);

        assert!(matches!(result, Err(SizhuError::NoFrontmatter)));
    }

    #[test]
    fn test_extract_frontmatter_missing_closing() {
        let content = "---\ntitle: Unclosed\nBody";
        let result = extract_frontmatter(content);

        assert!(matches!(result, Err(SizhuError::UnclosedFrontmatter)));
    }

    #[test]
    fn test_extract_frontmatter_empty_content() {
        assert!(matches!(
            extract_frontmatter(""),
            Err(SizhuError::NoFrontmatter)
        ));
    }

    #[test]
    fn test_load_selection_absent() {
        assert_eq!(load_selection("plain note", "default").unwrap(), None);

        let content = "---\ntitle: Untouched\n---\nBody";
        assert_eq!(load_selection(content, "default").unwrap(), None);
    }

    #[test]
    fn test_load_selection_present() {
        let content = "---\nfourPillars:\n  default:\n    年: {天干: 甲, 地支: 子}\n---\n";
        let pillars = load_selection(content, "default").unwrap().unwrap();
        assert_eq!(pillars.year, Pillar::complete(Stem::Jia, Branch::Zi));
        assert!(pillars.month.is_empty());
    }

    #[test]
    fn test_load_selection_malformed_yaml_errors() {
        let content = "---\nfourPillars: [broken\n---\n";
        assert!(load_selection(content, "default").is_err());
    }

    #[test]
    fn test_upsert_into_plain_content() {
        let mut pillars = FourPillars::default();
        pillars.year = Pillar::complete(Stem::Jia, Branch::Zi);

        let rewritten = upsert_selection("Body line", "default", &pillars).unwrap();
        assert!(rewritten.starts_with("---\n"));
        assert!(rewritten.ends_with("---\nBody line"));

        let reloaded = load_selection(&rewritten, "default").unwrap().unwrap();
        assert_eq!(reloaded, pillars);
    }

    #[test]
    fn test_upsert_preserves_foreign_keys_and_body() {
        let content = "---\ntitle: Keep me\ntags:\n- chart\n---\nThe body";
        let mut pillars = FourPillars::default();
        pillars.day = Pillar::complete(Stem::Geng, Branch::Shen);

        let rewritten = upsert_selection(content, "block-1", &pillars).unwrap();
        assert!(rewritten.contains("title: Keep me"));
        assert!(rewritten.contains("- chart"));
        assert!(rewritten.ends_with("The body"));

        let reloaded = load_selection(&rewritten, "block-1").unwrap().unwrap();
        assert_eq!(reloaded, pillars);
    }

    #[test]
    fn test_upsert_replaces_existing_selector() {
        let mut first = FourPillars::default();
        first.year = Pillar::complete(Stem::Jia, Branch::Zi);
        let mut second = FourPillars::default();
        second.year = Pillar::complete(Stem::Yi, Branch::Chou);

        let once = upsert_selection("", "default", &first).unwrap();
        let twice = upsert_selection(&once, "default", &second).unwrap();

        let reloaded = load_selection(&twice, "default").unwrap().unwrap();
        assert_eq!(reloaded, second);
    }

    #[test]
    fn test_upsert_keeps_other_selectors() {
        let mut first = FourPillars::default();
        first.hour = Pillar::complete(Stem::Ren, Branch::Xu);
        let mut second = FourPillars::default();
        second.hour = Pillar::complete(Stem::Gui, Branch::Hai);

        let once = upsert_selection("", "a", &first).unwrap();
        let twice = upsert_selection(&once, "b", &second).unwrap();

        assert_eq!(load_selection(&twice, "a").unwrap().unwrap(), first);
        assert_eq!(load_selection(&twice, "b").unwrap().unwrap(), second);
    }
}
