//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, MessageService, PostService, ProfileService, UserService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgFriendshipRepository, PgMessageRepository, PgPostRepository, PgSubscriptionRepository,
    PgUserRepository,
};
use crate::infrastructure::storage::ImageStorage;
use crate::utils::cookie::SessionCookie;
use crate::utils::jwt::JwtCodec;
use crate::web::navigation::NavigationTable;

pub type AppMessageService =
    MessageService<PgMessageRepository, PgUserRepository, PgFriendshipRepository>;
pub type AppProfileService =
    ProfileService<PgUserRepository, PgSubscriptionRepository, PgFriendshipRepository>;

/// Cheaply cloneable handle to services, storage and the navigation table.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub post_service: Arc<PostService<PgPostRepository>>,
    pub message_service: Arc<AppMessageService>,
    pub profile_service: Arc<AppProfileService>,
    pub storage: Arc<dyn ImageStorage>,
    pub navigation: Arc<NavigationTable>,
    pub session: SessionCookie,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    pub fn new(pool: Arc<PgPool>, storage: Arc<dyn ImageStorage>, config: &Config) -> Self {
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        let posts = Arc::new(PgPostRepository::new(pool.clone()));
        let messages = Arc::new(PgMessageRepository::new(pool.clone()));
        let subscriptions = Arc::new(PgSubscriptionRepository::new(pool.clone()));
        let friendships = Arc::new(PgFriendshipRepository::new(pool.clone()));

        let codec = JwtCodec::new(&config.jwt_secret, config.jwt_expiration_seconds);
        let auth_service = Arc::new(AuthService::new(users.clone(), codec));
        let session = SessionCookie::new(
            config.jwt_cookie_name.clone(),
            auth_service.token_lifetime_seconds(),
            config.cookie_secure,
        );

        Self {
            db: pool,
            user_service: Arc::new(UserService::new(users.clone())),
            auth_service,
            post_service: Arc::new(PostService::new(posts, storage.clone())),
            message_service: Arc::new(MessageService::new(
                messages,
                users.clone(),
                friendships.clone(),
            )),
            profile_service: Arc::new(ProfileService::new(users, subscriptions, friendships)),
            storage,
            navigation: Arc::new(NavigationTable::current()),
            session,
        }
    }
}
