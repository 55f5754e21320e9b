mod common;

use social_media_api::domain::entities::{NewMessage, NewPost, NewUser, PostPatch, Role};
use social_media_api::domain::repositories::{
    FeedQuery, FriendshipRepository, MessageRepository, PostRepository, SortDirection,
    SubscriptionRepository, UserRepository,
};
use social_media_api::error::AppError;
use social_media_api::infrastructure::persistence::{
    PgFriendshipRepository, PgMessageRepository, PgPostRepository, PgSubscriptionRepository,
    PgUserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

async fn insert_user(repo: &PgUserRepository, email: &str, name: &str) -> i64 {
    repo.create(NewUser {
        email: email.to_string(),
        name: name.to_string(),
        password_hash: "hash".to_string(),
        role: Role::User,
    })
    .await
    .unwrap()
    .id
}

fn new_post(author_id: i64, title: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: format!("{title} body"),
        image_link: None,
        author_id,
    }
}

#[sqlx::test]
async fn test_user_lookup_and_uniqueness(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let id = insert_user(&repo, "Alice@Example.com", "alice").await;

    let by_email = repo.find_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(id));
    assert_eq!(repo.find_by_name("alice").await.unwrap().map(|u| u.id), Some(id));

    let duplicate = repo
        .create(NewUser {
            email: "ALICE@example.com".to_string(),
            name: "someone".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_set_role(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let id = insert_user(&repo, "bob@example.com", "bob").await;

    assert!(repo.set_role(id, Role::Admin).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().unwrap().is_admin());
    assert!(!repo.set_role(id + 1000, Role::Admin).await.unwrap());
}

#[sqlx::test]
async fn test_post_crud(pool: PgPool) {
    let pool = Arc::new(pool);
    let users = PgUserRepository::new(pool.clone());
    let posts = PgPostRepository::new(pool.clone());
    let author = insert_user(&users, "carol@example.com", "carol").await;

    let post = posts.create(new_post(author, "first")).await.unwrap();
    assert_eq!(post.author.id, author);
    assert_eq!(post.author.name, "carol");

    let updated = posts
        .update(
            post.id,
            PostPatch {
                title: "renamed".to_string(),
                content: "new body".to_string(),
                image_link: Some("a.png".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.image_link.as_deref(), Some("a.png"));

    assert_eq!(posts.list_all().await.unwrap().len(), 1);
    assert!(posts.delete(post.id).await.unwrap());
    assert!(!posts.delete(post.id).await.unwrap());
    assert!(posts.find_by_id(post.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_feed_contains_only_followed_channels(pool: PgPool) {
    let shared = Arc::new(pool.clone());
    let users = PgUserRepository::new(shared.clone());
    let posts = PgPostRepository::new(shared.clone());

    let reader = insert_user(&users, "reader@example.com", "reader").await;
    let followed = insert_user(&users, "followed@example.com", "followed").await;
    let stranger = insert_user(&users, "stranger@example.com", "stranger").await;

    common::follow(&pool, followed, reader).await;
    for title in ["one", "two", "three"] {
        posts.create(new_post(followed, title)).await.unwrap();
    }
    posts.create(new_post(stranger, "hidden")).await.unwrap();

    assert_eq!(posts.count_by_subscriber(reader).await.unwrap(), 3);

    let newest_first = posts
        .find_by_subscriber(
            reader,
            FeedQuery {
                direction: SortDirection::Desc,
                limit: 2,
                offset: 0,
            },
        )
        .await
        .unwrap();
    let titles: Vec<_> = newest_first.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["three", "two"]);

    let oldest_first = posts
        .find_by_subscriber(
            reader,
            FeedQuery {
                direction: SortDirection::Asc,
                limit: 2,
                offset: 2,
            },
        )
        .await
        .unwrap();
    let titles: Vec<_> = oldest_first.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["three"]);
}

#[sqlx::test]
async fn test_subscriptions(pool: PgPool) {
    let pool = Arc::new(pool);
    let users = PgUserRepository::new(pool.clone());
    let subscriptions = PgSubscriptionRepository::new(pool.clone());

    let channel = insert_user(&users, "chan@example.com", "chan").await;
    let fan = insert_user(&users, "fan@example.com", "fan").await;

    let created = subscriptions.create(channel, fan, false).await.unwrap();
    assert!(!created.active);

    assert!(subscriptions.set_active(channel, fan, true).await.unwrap());
    assert!(subscriptions.find(channel, fan).await.unwrap().unwrap().active);
    assert!(!subscriptions.set_active(fan, channel, true).await.unwrap());

    let channels = subscriptions.channels_of(fan).await.unwrap();
    assert_eq!(channels.iter().map(|u| u.id).collect::<Vec<_>>(), vec![channel]);
    let subscribers = subscriptions.subscribers_of(channel).await.unwrap();
    assert_eq!(subscribers.iter().map(|u| u.id).collect::<Vec<_>>(), vec![fan]);

    assert!(subscriptions.delete(channel, fan).await.unwrap());
    assert!(subscriptions.find(channel, fan).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_friendships_are_symmetric(pool: PgPool) {
    let pool = Arc::new(pool);
    let users = PgUserRepository::new(pool.clone());
    let friendships = PgFriendshipRepository::new(pool.clone());

    let a = insert_user(&users, "a@example.com", "a").await;
    let b = insert_user(&users, "b@example.com", "b").await;

    friendships.add(b, a).await.unwrap();
    friendships.add(a, b).await.unwrap();

    assert!(friendships.are_friends(a, b).await.unwrap());
    assert!(friendships.are_friends(b, a).await.unwrap());
    assert_eq!(friendships.friends_of(a).await.unwrap().len(), 1);
    assert_eq!(friendships.friends_of(b).await.unwrap()[0].id, a);

    friendships.remove(a, b).await.unwrap();
    assert!(!friendships.are_friends(b, a).await.unwrap());
}

#[sqlx::test]
async fn test_message_history_covers_both_directions(pool: PgPool) {
    let pool = Arc::new(pool);
    let users = PgUserRepository::new(pool.clone());
    let messages = PgMessageRepository::new(pool.clone());

    let a = insert_user(&users, "ma@example.com", "ma").await;
    let b = insert_user(&users, "mb@example.com", "mb").await;
    let c = insert_user(&users, "mc@example.com", "mc").await;

    for (sender_id, receiver_id, content) in [(a, b, "hi"), (b, a, "hello"), (a, c, "other")] {
        messages
            .create(NewMessage {
                sender_id,
                receiver_id,
                content: content.to_string(),
            })
            .await
            .unwrap();
    }

    let history = messages.history(b, a).await.unwrap();
    let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["hi", "hello"]);
    assert_eq!(history[0].sender.id, a);
    assert_eq!(history[0].receiver.id, b);
}
