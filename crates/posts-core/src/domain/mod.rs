//! Domain entities - the core business objects.

mod post;
mod timestamp;

pub use post::{NewPost, Post};
