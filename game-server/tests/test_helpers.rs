#![allow(dead_code)]

use async_trait::async_trait;
use game_persistence::connection::connect_and_migrate;
use game_persistence::repositories::{LeaderboardRepository, VerbRepository};
use game_server::create_routes;
use game_server::translation::{TranslateError, Translator};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use warp::Filter;

/// Verbs loaded into every test database, in id order
pub const TEST_VERBS: &[(&str, &str)] = &[
    ("manger", "to eat"),
    ("boire", "to drink"),
    ("aller", "to go"),
    ("être", "to be"),
    ("céder", "to yield"),
];

/// Translator backed by a fixed dictionary; counts how often it is called
pub struct DictionaryTranslator {
    entries: HashMap<String, String>,
    calls: AtomicUsize,
}

impl DictionaryTranslator {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(french, english)| (french.to_string(), english.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for DictionaryTranslator {
    async fn translate(&self, text: &str, _target_lang: &str) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .get(text)
            .cloned()
            .ok_or(TranslateError::EmptyTranslation)
    }
}

/// Translator standing in for an unreachable provider
pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String, TranslateError> {
        Err(TranslateError::Api {
            status: 503,
            message: "Service unavailable".to_string(),
        })
    }
}

/// Test setup that provides all necessary components
#[derive(Clone)]
pub struct TestServerSetup {
    pub verb_repository: Arc<VerbRepository>,
    pub leaderboard_repository: Arc<LeaderboardRepository>,
    pub translator: Arc<DictionaryTranslator>,
}

impl TestServerSetup {
    /// In-memory database seeded with `TEST_VERBS`
    pub async fn new() -> Self {
        let setup = Self::empty().await;
        setup
            .verb_repository
            .insert_many(TEST_VERBS.iter().map(|(french, _)| french.to_string()).collect())
            .await
            .unwrap();
        setup
    }

    /// In-memory database with no verbs
    pub async fn empty() -> Self {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        Self {
            verb_repository: Arc::new(VerbRepository::new(db.clone())),
            leaderboard_repository: Arc::new(LeaderboardRepository::new(db)),
            translator: Arc::new(DictionaryTranslator::new(TEST_VERBS)),
        }
    }

    /// Routes over this setup's handles. Takes `self` so the filter owns
    /// everything it uses; clone the setup first to keep inspecting it.
    pub fn into_routes(self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        create_routes(
            self.verb_repository,
            self.leaderboard_repository,
            self.translator,
            10,
        )
    }

    pub fn into_routes_with_translator(
        self,
        translator: Arc<dyn Translator>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        create_routes(
            self.verb_repository,
            self.leaderboard_repository,
            translator,
            10,
        )
    }
}

/// Issue a GET and decode the JSON body
pub async fn get_json<F>(app: &F, path: &str) -> (u16, serde_json::Value)
where
    F: Filter + 'static,
    F::Extract: warp::Reply + Send,
{
    let response = warp::test::request().method("GET").path(path).reply(app).await;
    let body = serde_json::from_slice(response.body()).unwrap_or(serde_json::Value::Null);
    (response.status().as_u16(), body)
}

/// Issue a POST with a JSON body and decode the JSON response
pub async fn post_json<F>(app: &F, path: &str, body: &serde_json::Value) -> (u16, serde_json::Value)
where
    F: Filter + 'static,
    F::Extract: warp::Reply + Send,
{
    let response = warp::test::request()
        .method("POST")
        .path(path)
        .header("content-type", "application/json")
        .body(body.to_string())
        .reply(app)
        .await;
    let body = serde_json::from_slice(response.body()).unwrap_or(serde_json::Value::Null);
    (response.status().as_u16(), body)
}
