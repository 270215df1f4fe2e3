/// The feed page handler: one stateless pass per request through session
/// lookup, the feed query, assembly, and rendering.
use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use tracing::debug;

use crate::config::Config;
use crate::db::feed_repo;
use crate::error::Result;
use crate::render;
use crate::services::feed;
use crate::session::{self, SessionStore};

/// GET / - render the front page.
///
/// The session read and the feed query are independent; a query failure is
/// fatal for the request and surfaces as the generic error page, while an
/// absent identity or an empty board renders normally.
pub async fn feed_page(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    sessions: web::Data<SessionStore>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let identity = session::current_identity(&req, &sessions).map(feed::sanitize_identity);

    let limit = i64::from(config.feed.limit);
    let records = feed_repo::list_recent_posts(&pool, limit).await?;

    debug!(
        rows = records.len(),
        limit,
        authenticated = identity.is_some(),
        "feed page assembled"
    );

    let rows = feed::assemble_feed(records);
    let body = render::render_feed_page(&rows, identity.as_ref());

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
