//! Dashboard aggregation over the store's unfiltered listing.

mod common;

use std::sync::Arc;

use common::{date, FakeStore};
use plano_client::guard::{MountCounter, ViewGuard};
use plano_client::screens::dashboard::DashboardScreen;
use plano_core::messages;
use plano_core::status::PlanoStatus::{self, *};

fn store_with(statuses: &[PlanoStatus]) -> Arc<FakeStore> {
    let store = FakeStore::signed_in();
    let regional = store.seed_regional("Norte");
    let responsavel = store.seed_responsavel("Ana", regional);
    for (i, status) in statuses.iter().enumerate() {
        store.seed_plano(regional, responsavel, &format!("acao {i}"), date(3, 1), *status);
    }
    Arc::new(store)
}

#[tokio::test]
async fn test_starts_loading_with_zeroed_stats() {
    let screen = DashboardScreen::new(store_with(&[]), ViewGuard::detached());
    assert!(screen.is_loading());
    assert_eq!(screen.summary().total, 0);
}

#[tokio::test]
async fn test_four_rows_two_planned() {
    let store = store_with(&[Planejado, Planejado, EmAndamento, Concluido]);
    let mut screen = DashboardScreen::new(store, ViewGuard::detached());
    screen.load().await;

    assert!(!screen.is_loading());
    assert_eq!(screen.error(), None);

    let summary = screen.summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.completion_rate(), 25);
    assert_eq!(summary.in_progress_rate(), 25);
    assert_eq!(summary.late_rate(), 0);

    let shares: Vec<(PlanoStatus, u64, u32)> = screen
        .buckets()
        .iter()
        .map(|b| (b.status, b.count, b.percentage))
        .collect();
    assert_eq!(
        shares,
        [
            (Planejado, 2, 50),
            (EmAndamento, 1, 25),
            (Concluido, 1, 25),
            (Atrasado, 0, 0),
        ]
    );
}

#[tokio::test]
async fn test_empty_store_shows_zero_everywhere() {
    let mut screen = DashboardScreen::new(store_with(&[]), ViewGuard::detached());
    screen.load().await;

    assert_eq!(screen.summary().total, 0);
    assert!(screen.buckets().iter().all(|b| b.count == 0 && b.percentage == 0));
}

#[tokio::test]
async fn test_failure_shows_message() {
    let store = store_with(&[Atrasado]);
    store.fail("list_planos");
    let mut screen = DashboardScreen::new(store, ViewGuard::detached());
    screen.load().await;

    assert_eq!(screen.error(), Some(messages::LOAD_STATS_FAILED));
    assert_eq!(screen.summary().total, 0);
}

#[tokio::test]
async fn test_result_arriving_after_navigation_is_dropped() {
    let store = store_with(&[Concluido, Concluido]);
    let counter = MountCounter::default();
    let mut screen = DashboardScreen::new(store.clone(), counter.mount());

    let nav = counter.clone();
    store.during_next("list_planos", move || nav.advance());
    screen.load().await;

    assert_eq!(store.calls("list_planos"), 1);
    assert_eq!(screen.summary().total, 0);
    assert_eq!(screen.error(), None);
}
