/// The feed query: most recent posts with author nickname and comment count.
use sqlx::PgPool;

use crate::models::FeedRecord;

/// Fetch the `limit` most recent posts, each joined with its author's
/// nickname and an exact comment count.
///
/// The query runs in two stages. The inner sub-select windows the posts
/// (ORDER BY id DESC, LIMIT $1) and attaches the nickname BEFORE comments
/// enter the picture; limiting after the comment join would let the
/// one-to-many fan-out inflate the row count and corrupt the window. The
/// outer query then LEFT JOINs comments so zero-comment posts survive,
/// groups per post, and re-sorts by id descending since GROUP BY gives no
/// ordering guarantee.
pub async fn list_recent_posts(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<FeedRecord>, sqlx::Error> {
    let records = sqlx::query_as::<_, FeedRecord>(
        r#"
        SELECT
            t.id,
            t.title,
            t.view_count,
            t.created_at,
            t.nickname,
            COUNT(c.id) AS comment_count
        FROM (
            SELECT
                p.id,
                p.title,
                p.view_count,
                p.created_at,
                u.nickname
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.id DESC
            LIMIT $1
        ) AS t
        LEFT JOIN comments c ON c.post_id = t.id
        GROUP BY t.id, t.title, t.view_count, t.created_at, t.nickname
        ORDER BY t.id DESC
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(records)
}
