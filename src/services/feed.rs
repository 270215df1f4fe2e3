/// Feed assembly: raw query rows become display-safe feed rows.
///
/// All output encoding happens here, through one escaping function applied
/// to every stored text field; the renderer never escapes anything itself.
use crate::models::{FeedRecord, FeedRow, Identity};

/// Escape the HTML-significant characters of untrusted text.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Turn raw feed records into display-ready rows, preserving order. Pure
/// function; numeric and timestamp fields pass through typed.
pub fn assemble_feed(records: Vec<FeedRecord>) -> Vec<FeedRow> {
    records.into_iter().map(assemble_row).collect()
}

fn assemble_row(record: FeedRecord) -> FeedRow {
    FeedRow {
        id: record.id,
        title: escape_html(&record.title),
        view_count: record.view_count,
        created_at: record.created_at,
        nickname: escape_html(&record.nickname),
        comment_count: record.comment_count,
    }
}

/// The session nickname is untrusted text like any other; run it through the
/// same escaping before it reaches the renderer.
pub fn sanitize_identity(identity: Identity) -> Identity {
    Identity {
        nickname: escape_html(&identity.nickname),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, title: &str, nickname: &str) -> FeedRecord {
        FeedRecord {
            id,
            title: title.to_string(),
            view_count: 7,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            nickname: nickname.to_string(),
            comment_count: 3,
        }
    }

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("안녕하세요 kim"), "안녕하세요 kim");
    }

    #[test]
    fn test_assemble_feed_escapes_text_fields() {
        let rows = assemble_feed(vec![record(1, "<b>hi</b>", "a&b")]);
        assert_eq!(rows[0].title, "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(rows[0].nickname, "a&amp;b");
    }

    #[test]
    fn test_assemble_feed_passes_typed_fields_through() {
        let input = record(42, "t", "n");
        let created_at = input.created_at;
        let rows = assemble_feed(vec![input]);
        assert_eq!(rows[0].id, 42);
        assert_eq!(rows[0].view_count, 7);
        assert_eq!(rows[0].comment_count, 3);
        assert_eq!(rows[0].created_at, created_at);
    }

    #[test]
    fn test_assemble_feed_preserves_order() {
        let rows = assemble_feed(vec![record(3, "a", "x"), record(2, "b", "y"), record(1, "c", "z")]);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_assemble_feed_empty_input() {
        assert!(assemble_feed(Vec::new()).is_empty());
    }

    #[test]
    fn test_sanitize_identity_escapes_nickname() {
        let identity = sanitize_identity(Identity {
            nickname: "<kim>".to_string(),
        });
        assert_eq!(identity.nickname, "&lt;kim&gt;");
    }
}
