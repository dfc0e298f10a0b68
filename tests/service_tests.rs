use late_show::db::Store;
use late_show::services::{
    AppearanceError, AppearanceService, EpisodeError, EpisodeService, GuestError, GuestService,
    SeaOrmAppearanceService, SeaOrmEpisodeService, SeaOrmGuestService,
};
use serde_json::json;

struct Services {
    episodes: SeaOrmEpisodeService,
    guests: SeaOrmGuestService,
    appearances: SeaOrmAppearanceService,
}

async fn services() -> Services {
    let db_path =
        std::env::temp_dir().join(format!("late-show-service-{}.db", uuid::Uuid::new_v4()));
    let store = Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to open store");

    Services {
        episodes: SeaOrmEpisodeService::new(store.clone()),
        guests: SeaOrmGuestService::new(store.clone()),
        appearances: SeaOrmAppearanceService::new(store),
    }
}

#[tokio::test]
async fn create_then_delete_guest_cascades() {
    let s = services().await;

    let episode = s.episodes.create_episode("1/11/99".into(), 1).await.unwrap();
    let guest = s
        .guests
        .create_guest("Tom Hanks".into(), "Actor".into())
        .await
        .unwrap();
    assert_eq!(guest.name, "Tom Hanks");

    let created = s
        .appearances
        .create_appearance(&json!(5), episode.id.value().into(), guest.id.value().into())
        .await
        .unwrap();
    assert_eq!(created.rating.value(), 5);
    assert_eq!(created.guest.id, guest.id);

    assert_eq!(s.guests.delete_guest(guest.id).await.unwrap(), 1);
    assert!(matches!(
        s.guests.get_guest(guest.id).await,
        Err(GuestError::NotFound(id)) if id == guest.id
    ));

    let detail = s.episodes.get_episode(episode.id).await.unwrap();
    assert!(detail.appearances.is_empty());
}

#[tokio::test]
async fn delete_episode_reports_removed_appearances() {
    let s = services().await;

    let episode = s.episodes.create_episode("1/12/99".into(), 2).await.unwrap();
    for name in ["Tom Hanks", "Madonna"] {
        let guest = s.guests.create_guest(name.into(), "Guest".into()).await.unwrap();
        s.appearances
            .create_appearance(&json!(3), episode.id.value().into(), guest.id.value().into())
            .await
            .unwrap();
    }

    assert_eq!(s.episodes.delete_episode(episode.id).await.unwrap(), 2);
    assert!(matches!(
        s.episodes.delete_episode(episode.id).await,
        Err(EpisodeError::NotFound(_))
    ));
    assert!(s.episodes.list_episodes().await.unwrap().is_empty());
}

#[tokio::test]
async fn rating_is_checked_before_references() {
    let s = services().await;

    let err = s
        .appearances
        .create_appearance(&json!(7), 1, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppearanceError::Validation(_)));

    let err = s
        .appearances
        .create_appearance(&json!(2), 1, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppearanceError::MissingReference));

    // Too wide for any row: still a bad rating first, then a missing reference
    let err = s
        .appearances
        .create_appearance(&json!("five"), 9_999_999_999, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppearanceError::Validation(_)));

    let err = s
        .appearances
        .create_appearance(&json!(2), 1, i64::from(i32::MAX) + 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppearanceError::MissingReference));
}
