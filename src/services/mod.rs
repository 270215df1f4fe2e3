/// Business logic between the database layer and the handlers.
pub mod feed;
