/// HTML rendering of the feed page.
///
/// Pure functions of their inputs: no query or session access happens here,
/// and no escaping either since every text field arriving in a `FeedRow` or
/// sanitized `Identity` is already display-safe.
use crate::models::{FeedRow, Identity};

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the full feed page: navigation menu plus the post table, one table
/// row per feed row in the order given. The header row is always present,
/// even for an empty board.
pub fn render_feed_page(rows: &[FeedRow], identity: Option<&Identity>) -> String {
    let mut page = String::with_capacity(1024 + rows.len() * 256);

    page.push_str(concat!(
        "<!doctype html>\n",
        "<html lang=\"ko\">\n",
        "<head>\n",
        "  <meta charset=\"utf-8\" />\n",
        "  <title>게시글 목록</title>\n",
        "</head>\n",
        "<body>\n",
        "<h1>게시글 목록</h1>\n",
        "<div class=\"container\">\n",
    ));

    render_top_menu(&mut page, identity);
    render_post_table(&mut page, rows);

    page.push_str(concat!(
        "  <div class=\"footer\">한국IT교육원 · DB 기반 웹서비스 실습</div>\n",
        "</div>\n",
        "</body>\n",
        "</html>\n",
    ));

    page
}

fn render_top_menu(page: &mut String, identity: Option<&Identity>) {
    page.push_str("  <div class=\"top-menu\">\n");
    match identity {
        Some(identity) => {
            page.push_str(&format!("    {} 님\n", identity.nickname));
            page.push_str("    <a href=\"/logout\">로그아웃</a>\n");
        }
        None => {
            page.push_str("    <a href=\"/register\">회원가입</a>\n");
            page.push_str("    <a href=\"/login\">로그인</a>\n");
        }
    }
    page.push_str("    <a href=\"/posts/new\">글쓰기</a>\n");
    page.push_str("  </div>\n");
}

fn render_post_table(page: &mut String, rows: &[FeedRow]) {
    page.push_str(concat!(
        "  <table>\n",
        "    <thead>\n",
        "      <tr>\n",
        "        <th>ID</th>\n",
        "        <th>제목</th>\n",
        "        <th>작성자</th>\n",
        "        <th>조회수</th>\n",
        "        <th>댓글</th>\n",
        "        <th>작성일</th>\n",
        "      </tr>\n",
        "    </thead>\n",
        "    <tbody>\n",
    ));

    for row in rows {
        page.push_str("      <tr>\n");
        page.push_str(&format!("        <td>{}</td>\n", row.id));
        page.push_str(&format!(
            "        <td class=\"title\"><a href=\"/posts/{}\">{}</a></td>\n",
            row.id, row.title
        ));
        page.push_str(&format!("        <td>{}</td>\n", row.nickname));
        page.push_str(&format!("        <td>{}</td>\n", row.view_count));
        page.push_str(&format!(
            "        <td class=\"comment-count\">{}</td>\n",
            row.comment_count
        ));
        page.push_str(&format!(
            "        <td>{}</td>\n",
            row.created_at.format(CREATED_AT_FORMAT)
        ));
        page.push_str("      </tr>\n");
    }

    page.push_str("    </tbody>\n  </table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(id: i64, title: &str, comment_count: i64) -> FeedRow {
        FeedRow {
            id,
            title: title.to_string(),
            view_count: 11,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            nickname: "kim".to_string(),
            comment_count,
        }
    }

    #[test]
    fn test_authenticated_menu_shows_nickname_and_logout() {
        let identity = Identity {
            nickname: "kim".to_string(),
        };
        let page = render_feed_page(&[], Some(&identity));
        assert!(page.contains("kim 님"));
        assert!(page.contains("href=\"/logout\""));
        assert!(page.contains("href=\"/posts/new\""));
        assert!(!page.contains("href=\"/register\""));
        assert!(!page.contains("href=\"/login\""));
    }

    #[test]
    fn test_anonymous_menu_shows_register_and_login() {
        let page = render_feed_page(&[], None);
        assert!(page.contains("href=\"/register\""));
        assert!(page.contains("href=\"/login\""));
        assert!(page.contains("href=\"/posts/new\""));
        assert!(!page.contains("href=\"/logout\""));
        assert!(!page.contains(" 님"));
    }

    #[test]
    fn test_empty_feed_renders_header_row_only() {
        let page = render_feed_page(&[], None);
        assert!(page.contains("<th>제목</th>"));
        assert!(page.contains("<tbody>\n    </tbody>"));
    }

    #[test]
    fn test_one_table_row_per_feed_row_in_order() {
        let page = render_feed_page(&[row(3, "A", 0), row(2, "B", 2)], None);
        let first = page.find("/posts/3").unwrap();
        let second = page.find("/posts/2").unwrap();
        assert!(first < second);
        assert_eq!(page.matches("<td class=\"title\">").count(), 2);
    }

    #[test]
    fn test_row_cells_rendered() {
        let page = render_feed_page(&[row(7, "hello", 4)], None);
        assert!(page.contains("<td>7</td>"));
        assert!(page.contains("<a href=\"/posts/7\">hello</a>"));
        assert!(page.contains("<td>kim</td>"));
        assert!(page.contains("<td>11</td>"));
        assert!(page.contains("<td class=\"comment-count\">4</td>"));
        assert!(page.contains("<td>2024-03-01 09:30:00</td>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let rows = [row(3, "A", 0), row(2, "B", 2)];
        assert_eq!(render_feed_page(&rows, None), render_feed_page(&rows, None));
    }
}
