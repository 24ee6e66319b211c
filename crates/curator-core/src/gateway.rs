use std::future::Future;

use crate::error::GatewayError;
use crate::post::{Post, PostPage};

/// The three admin-API operations the feed controller consumes. Implemented
/// by [`crate::AdminClient`] over HTTP and by scripted gateways in tests.
pub trait PostGateway: Send + Sync {
    /// Fetches one page of the listing. Pages past the end come back empty
    /// with `last = true`; the gateway does not validate an upper bound.
    fn list_posts(&self, page: u32) -> impl Future<Output = Result<PostPage, GatewayError>> + Send;

    /// Fetches every post by one author. No match is an empty vector, not an
    /// error.
    fn posts_by_user(&self, user_id: i64) -> impl Future<Output = Result<Vec<Post>, GatewayError>> + Send;

    /// Deletes a single post. Deleting an id that is already gone surfaces as
    /// a status error the caller treats as benign.
    fn delete_post(&self, id: i64) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
