pub mod batch;
pub mod client;
pub mod error;
pub mod feed;
pub mod gateway;
pub mod post;

pub use batch::{delete_batch, BatchOutcome};
pub use client::AdminClient;
pub use error::GatewayError;
pub use feed::{FetchTicket, PostFeed, SearchSubmit};
pub use gateway::PostGateway;
pub use post::{Post, PostPage, PAGE_SIZE};
