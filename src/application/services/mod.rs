//! Business logic services for the application layer.

pub mod auth_service;
pub mod message_service;
pub mod post_service;
pub mod profile_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use message_service::MessageService;
pub use post_service::{FeedPage, ImageUpload, PostForm, PostService};
pub use profile_service::ProfileService;
pub use user_service::UserService;
