use crate::domain::staff::StaffRecord;
use regex::RegexBuilder;
use serde_json::Value;

/// Checks whether any value in the record contains the search term.
///
/// Matching is a case-insensitive substring test over every string, number
/// and boolean the record actually holds, including values nested inside
/// arrays and objects. Absent fields and `null` never match. An empty term
/// matches every record.
pub fn matches_search(record: &StaffRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    record
        .fields()
        .values()
        .any(|value| value_matches(value, &needle))
}

fn value_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => contains_ignore_case(&b.to_string(), needle),
        Value::Number(n) => contains_ignore_case(&n.to_string(), needle),
        Value::String(s) => contains_ignore_case(s, needle),
        Value::Array(items) => items.iter().any(|item| value_matches(item, needle)),
        Value::Object(map) => map.values().any(|item| value_matches(item, needle)),
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// A piece of display text, marked when it matched the search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Matched(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) | Segment::Matched(text) => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Segment::Matched(_))
    }
}

/// Splits `text` into plain and matched segments for the search term.
///
/// The term is matched literally and case-insensitively. Concatenating the
/// segments always reproduces `text`.
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if term.is_empty() || text.is_empty() {
        return vec![Segment::Plain(text)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return vec![Segment::Plain(text)],
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Plain(&text[cursor..found.start()]));
        }
        segments.push(Segment::Matched(found.as_str()));
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(&text[cursor..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> StaffRecord {
        StaffRecord::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches_search(&StaffRecord::default(), ""));
    }

    #[test]
    fn test_matches_typed_fields_case_insensitive() {
        let r = record(json!({"staff_id": "T100", "name_foreign": "Chan Tai Man"}));

        assert!(matches_search(&r, "t100"));
        assert!(matches_search(&r, "TAI"));
        assert!(!matches_search(&r, "wong"));
    }

    #[test]
    fn test_matches_nested_pass_through_values() {
        let r = record(json!({
            "staff_id": "T1",
            "education_backgrounds": [
                {"school_name": "National Taiwan University", "certificate_year": 2012}
            ],
            "contact": {"email": "teacher@example.edu.mo"}
        }));

        assert!(matches_search(&r, "taiwan"));
        assert!(matches_search(&r, "2012"));
        assert!(matches_search(&r, "EXAMPLE.EDU"));
        assert!(!matches_search(&r, "harvard"));
    }

    #[test]
    fn test_booleans_are_stringified() {
        let r = record(json!({"staff_id": "X", "is_phd": true}));
        assert!(matches_search(&r, "true"));
        assert!(!matches_search(&r, "false"));
    }

    #[test]
    fn test_absent_fields_never_match() {
        let r = record(json!({"staff_id": "X9"}));

        assert!(!matches_search(&r, "fals"));
        assert!(!matches_search(&r, "true"));
        assert!(!matches_search(&r, "e"));
        assert!(matches_search(&r, "x9"));
    }

    #[test]
    fn test_null_values_never_match() {
        let r = record(json!({"staff_id": "X", "remark": null}));
        assert!(!matches_search(&r, "null"));
    }

    #[test]
    fn test_matches_chinese_text() {
        let r = record(json!({"staff_id": "T2", "name_chinese": "陳大文"}));
        assert!(matches_search(&r, "大文"));
    }

    #[test]
    fn test_matches_inside_malformed_known_field() {
        let r = record(json!({"staff_id": "T1", "name_chinese": ["陳大文"]}));
        assert!(matches_search(&r, "大文"));

        let r = record(json!({"staff_id": "T1", "gender": {"code": "Male"}}));
        assert!(matches_search(&r, "male"));
    }

    #[test]
    fn test_numeric_values_are_stringified() {
        let r = record(json!({"staff_id": 4200, "entry_date": 1577836800000_i64}));
        assert!(matches_search(&r, "420"));
        assert!(matches_search(&r, "15778"));
    }

    #[test]
    fn test_highlight_segments() {
        let segments = highlight("Chan Tai Man", "an");

        assert_eq!(
            segments,
            vec![
                Segment::Plain("Ch"),
                Segment::Matched("an"),
                Segment::Plain(" Tai M"),
                Segment::Matched("an"),
            ]
        );
    }

    #[test]
    fn test_highlight_preserves_original_case() {
        let segments = highlight("MATH dept", "math");
        assert_eq!(segments[0], Segment::Matched("MATH"));
        assert!(!segments[1].is_match());
    }

    #[test]
    fn test_highlight_treats_term_literally() {
        let segments = highlight("a.b (c)", "(c)");
        assert_eq!(segments.last(), Some(&Segment::Matched("(c)")));
    }

    #[test]
    fn test_highlight_reassembles_text() {
        let text = "陳大文 Chan Tai Man 大文";
        let joined: String = highlight(text, "大文").iter().map(Segment::text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_highlight_without_term() {
        assert_eq!(highlight("abc", ""), vec![Segment::Plain("abc")]);
    }
}
