/// HTTP request handlers
pub mod feed;

pub use feed::feed_page;
