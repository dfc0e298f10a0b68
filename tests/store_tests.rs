use late_show::db::Store;
use late_show::domain::{EpisodeId, GuestId};
use late_show::entities::appearances;
use late_show::models::NewAppearance;
use late_show::seed::Fixtures;
use sea_orm::{ActiveModelTrait, Set};

async fn temp_store() -> Store {
    let db_path =
        std::env::temp_dir().join(format!("late-show-store-{}.db", uuid::Uuid::new_v4()));

    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to open store")
}

#[tokio::test]
async fn relationships_are_navigable_from_both_sides() {
    let store = temp_store().await;

    let episode = store.create_episode("1/11/99", 1).await.unwrap();
    let tom = store.create_guest("Tom Hanks", "Actor").await.unwrap();
    let madonna = store.create_guest("Madonna", "Singer").await.unwrap();

    for (rating, guest) in [(5, tom.id), (3, madonna.id)] {
        let new = NewAppearance::new(rating, episode.id, guest).unwrap();
        store.create_appearance(&new).await.unwrap().unwrap();
    }

    let record = store
        .get_episode_with_appearances(episode.id)
        .await
        .unwrap()
        .unwrap();
    let names: Vec<_> = record
        .appearances
        .iter()
        .map(|(_, guest)| guest.name.as_str())
        .collect();
    assert_eq!(names, ["Tom Hanks", "Madonna"]);

    let record = store
        .get_guest_with_appearances(madonna.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.appearances.len(), 1);
    let (appearance, appeared_on) = &record.appearances[0];
    assert_eq!(appearance.rating().value(), 3);
    assert_eq!(appeared_on.id, episode.id);
}

#[tokio::test]
async fn deleting_a_guest_removes_only_their_appearances() {
    let store = temp_store().await;

    let episode_1 = store.create_episode("1/11/99", 1).await.unwrap().id;
    let episode_2 = store.create_episode("1/12/99", 2).await.unwrap().id;
    let tom = store.create_guest("Tom Hanks", "Actor").await.unwrap().id;
    let madonna = store.create_guest("Madonna", "Singer").await.unwrap().id;

    for (rating, episode, guest) in [(5, episode_1, tom), (3, episode_1, madonna), (1, episode_2, tom)] {
        let new = NewAppearance::new(rating, episode, guest).unwrap();
        store.create_appearance(&new).await.unwrap().unwrap();
    }

    assert_eq!(store.delete_guest(tom).await.unwrap(), Some(2));

    assert!(store.get_guest(tom).await.unwrap().is_none());
    assert_eq!(store.count_appearances().await.unwrap(), 1);
    assert_eq!(store.count_appearances_for_guest(madonna).await.unwrap(), 1);

    // Episodes outlive the guest
    assert_eq!(store.list_episodes().await.unwrap().len(), 2);

    assert_eq!(store.delete_guest(tom).await.unwrap(), None);
}

#[tokio::test]
async fn deleting_a_missing_episode_changes_nothing() {
    let store = temp_store().await;

    let episode = store.create_episode("1/11/99", 1).await.unwrap().id;
    let guest = store.create_guest("Tom Hanks", "Actor").await.unwrap().id;
    let new = NewAppearance::new(4, episode, guest).unwrap();
    store.create_appearance(&new).await.unwrap().unwrap();

    assert_eq!(store.delete_episode(EpisodeId::new(999)).await.unwrap(), None);
    assert_eq!(store.count_appearances().await.unwrap(), 1);
}

#[tokio::test]
async fn appearance_with_missing_parent_is_not_written() {
    let store = temp_store().await;

    let episode = store.create_episode("1/11/99", 1).await.unwrap().id;

    let new = NewAppearance::new(4, episode, GuestId::new(42)).unwrap();
    assert!(store.create_appearance(&new).await.unwrap().is_none());
    assert_eq!(store.count_appearances().await.unwrap(), 0);
}

#[tokio::test]
async fn entity_hook_rejects_out_of_range_rating() {
    let store = temp_store().await;

    let episode = store.create_episode("1/11/99", 1).await.unwrap();
    let guest = store.create_guest("Tom Hanks", "Actor").await.unwrap();

    let result = appearances::ActiveModel {
        rating: Set(9),
        episode_id: Set(episode.id.value()),
        guest_id: Set(guest.id.value()),
        ..Default::default()
    }
    .insert(&store.conn)
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Rating must be between 1 and 5."));
    assert_eq!(store.count_appearances().await.unwrap(), 0);
}

#[tokio::test]
async fn seed_loads_fixtures_and_is_repeatable() {
    let store = temp_store().await;
    store.create_guest("Leftover", "Stale row").await.unwrap();

    for _ in 0..2 {
        let summary = late_show::seed::seed(&store).await.unwrap();
        assert_eq!(summary.episodes, 3);
        assert_eq!(summary.guests, 4);
        assert_eq!(summary.appearances, 6);

        assert_eq!(store.list_episodes().await.unwrap().len(), 3);
        assert_eq!(store.list_guests().await.unwrap().len(), 4);
        assert_eq!(store.count_appearances().await.unwrap(), 6);
    }

    let guests = store.list_guests().await.unwrap();
    assert!(guests.iter().all(|g| g.name != "Leftover"));

    let fox = guests.iter().find(|g| g.name == "Michael J. Fox").unwrap();
    assert_eq!(store.count_appearances_for_guest(fox.id).await.unwrap(), 2);
}

#[tokio::test]
async fn failed_seed_keeps_previous_contents() {
    let store = temp_store().await;
    late_show::seed::seed(&store).await.unwrap();

    let broken = Fixtures {
        episodes: &[("2/1/99", 10)],
        guests: &[("Tom Hanks", "Actor")],
        appearances: &[(5, 0, 0), (9, 0, 0)],
    };
    assert!(late_show::seed::seed_with(&store, &broken).await.is_err());

    assert_eq!(store.list_episodes().await.unwrap().len(), 3);
    assert_eq!(store.list_guests().await.unwrap().len(), 4);
    assert_eq!(store.count_appearances().await.unwrap(), 6);
    assert!(
        store
            .list_guests()
            .await
            .unwrap()
            .iter()
            .all(|g| g.name != "Tom Hanks")
    );
}

#[tokio::test]
async fn same_guest_may_appear_twice_on_an_episode() {
    let store = temp_store().await;

    let episode = store.create_episode("1/11/99", 1).await.unwrap().id;
    let guest = store.create_guest("Tom Hanks", "Actor").await.unwrap().id;

    for rating in [5, 2] {
        let new = NewAppearance::new(rating, episode, guest).unwrap();
        assert!(store.create_appearance(&new).await.unwrap().is_some());
    }

    let record = store
        .get_episode_with_appearances(episode)
        .await
        .unwrap()
        .unwrap();
    let ratings: Vec<_> = record
        .appearances
        .iter()
        .map(|(appearance, _)| appearance.rating().value())
        .collect();
    assert_eq!(ratings, [5, 2]);
}
