use std::num::IntErrorKind;
use std::sync::Arc;
use warp::Filter;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use crate::error::ApiError;
use crate::translation::{TARGET_LANGUAGE, Translator};
use game_persistence::repositories::{LeaderboardRepository, VerbRepository};
use game_types::{ApiMessage, LeaderboardEntry, NewLeaderboardEntry, Verb, Word, WordId};

pub mod config;
pub mod error;
pub mod translation;
pub mod word_list;

const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn create_routes(
    verb_repository: Arc<VerbRepository>,
    leaderboard_repository: Arc<LeaderboardRepository>,
    translator: Arc<dyn Translator>,
    leaderboard_size: u64,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let verb_repository_filter = warp::any().map({
        let verb_repository = verb_repository.clone();
        move || verb_repository.clone()
    });

    let leaderboard_repository_filter = warp::any().map({
        let leaderboard_repository = leaderboard_repository.clone();
        move || leaderboard_repository.clone()
    });

    let translator_filter = warp::any().map({
        let translator = translator.clone();
        move || translator.clone()
    });

    let leaderboard_size_filter = warp::any().map(move || leaderboard_size);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let welcome = warp::path!("api")
        .and(warp::get())
        .map(|| warp::reply::json(&ApiMessage::new("Welcome to backend!")));

    // Random word
    let random_word = warp::path!("api" / "word")
        .and(warp::get())
        .and(verb_repository_filter.clone())
        .and(translator_filter.clone())
        .and_then(handle_random_word_request);

    // Word by id; the id is parsed by the handler so a bad id gets a 400
    let word_by_id = warp::path!("api" / "word" / String)
        .and(warp::get())
        .and(verb_repository_filter.clone())
        .and(translator_filter.clone())
        .and_then(handle_word_request);

    let leaderboard = warp::path!("api" / "leaderboard")
        .and(warp::get())
        .and(leaderboard_repository_filter.clone())
        .and(leaderboard_size_filter.clone())
        .and_then(handle_leaderboard_request);

    let submit_score = warp::path!("api" / "leaderboard")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(leaderboard_repository_filter.clone())
        .and(leaderboard_size_filter.clone())
        .and_then(handle_submit_score_request);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(welcome)
        .or(random_word)
        .or(word_by_id)
        .or(leaderboard)
        .or(submit_score)
        .with(cors)
        .with(warp::log("translatle"))
}

fn into_reply<T: serde::Serialize>(result: Result<T, ApiError>) -> WithStatus<Json> {
    match result {
        Ok(body) => warp::reply::with_status(warp::reply::json(&body), StatusCode::OK),
        Err(err) => err.into_reply(),
    }
}

async fn handle_random_word_request(
    verb_repository: Arc<VerbRepository>,
    translator: Arc<dyn Translator>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(into_reply(
        random_word(&verb_repository, translator.as_ref()).await,
    ))
}

async fn handle_word_request(
    id: String,
    verb_repository: Arc<VerbRepository>,
    translator: Arc<dyn Translator>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(into_reply(
        word_by_id(&id, &verb_repository, translator.as_ref()).await,
    ))
}

async fn handle_leaderboard_request(
    leaderboard_repository: Arc<LeaderboardRepository>,
    leaderboard_size: u64,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = leaderboard_repository
        .top_entries(leaderboard_size)
        .await
        .map_err(ApiError::from);

    Ok(into_reply(result))
}

async fn handle_submit_score_request(
    body: warp::hyper::body::Bytes,
    leaderboard_repository: Arc<LeaderboardRepository>,
    leaderboard_size: u64,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(into_reply(
        submit_score(&body, &leaderboard_repository, leaderboard_size).await,
    ))
}

async fn random_word(
    verb_repository: &VerbRepository,
    translator: &dyn Translator,
) -> Result<Word, ApiError> {
    let verb = verb_repository
        .random_verb()
        .await?
        .ok_or(ApiError::WordNotFound)?;

    translate_verb(verb, translator).await
}

async fn word_by_id(
    raw_id: &str,
    verb_repository: &VerbRepository,
    translator: &dyn Translator,
) -> Result<Word, ApiError> {
    let id = parse_word_id(raw_id)?;
    let verb = verb_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::WordNotFound)?;

    translate_verb(verb, translator).await
}

async fn submit_score(
    body: &[u8],
    leaderboard_repository: &LeaderboardRepository,
    leaderboard_size: u64,
) -> Result<Vec<LeaderboardEntry>, ApiError> {
    let submission: NewLeaderboardEntry =
        serde_json::from_slice(body).map_err(|_| ApiError::InvalidBody)?;
    let player = submission.name.trim();
    if player.is_empty() {
        return Err(ApiError::InvalidName);
    }

    let entry = leaderboard_repository
        .create_entry(player, submission.score)
        .await?;
    tracing::info!(
        "Recorded leaderboard entry {} for {} ({} tries)",
        entry.id,
        entry.player,
        entry.score
    );

    Ok(leaderboard_repository.top_entries(leaderboard_size).await?)
}

/// Integers beyond the id range cannot name a stored word.
fn parse_word_id(raw: &str) -> Result<WordId, ApiError> {
    match raw.parse::<WordId>() {
        Ok(id) => Ok(id),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(ApiError::WordNotFound)
        }
        Err(_) => Err(ApiError::InvalidId),
    }
}

async fn translate_verb(verb: Verb, translator: &dyn Translator) -> Result<Word, ApiError> {
    let english = translator.translate(&verb.verb, TARGET_LANGUAGE).await?;
    Ok(Word::new(verb.id, verb.verb, english))
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::translation::TranslateError;
    use async_trait::async_trait;
    use game_persistence::connection::connect_and_migrate;

    struct UppercaseTranslator;

    #[async_trait]
    impl Translator for UppercaseTranslator {
        async fn translate(&self, text: &str, _target_lang: &str) -> Result<String, TranslateError> {
            Ok(text.to_uppercase())
        }
    }

    async fn create_test_app()
    -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        let verb_repository = Arc::new(VerbRepository::new(db.clone()));
        verb_repository
            .insert_many(vec!["manger".to_string(), "boire".to_string()])
            .await
            .unwrap();

        create_routes(
            verb_repository,
            Arc::new(LeaderboardRepository::new(db)),
            Arc::new(UppercaseTranslator),
            10,
        )
    }

    #[test]
    fn test_parse_word_id() {
        assert_eq!(parse_word_id("12").unwrap(), 12);
        assert!(matches!(parse_word_id("abc"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_word_id("1.5"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_word_id(""), Err(ApiError::InvalidId)));
    }

    #[test]
    fn test_parse_word_id_out_of_range() {
        assert!(matches!(parse_word_id("99999999999"), Err(ApiError::WordNotFound)));
        assert!(matches!(parse_word_id("-99999999999"), Err(ApiError::WordNotFound)));
        assert!(matches!(parse_word_id("99999999999x"), Err(ApiError::InvalidId)));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "OK");
    }

    #[tokio::test]
    async fn test_welcome_endpoint() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/api")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Welcome to backend!" }));
    }

    #[tokio::test]
    async fn test_word_by_id_uses_translator() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/api/word/1")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let word: Word = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(word.french, "manger");
        assert_eq!(word.english, "MANGER");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/api/words")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_http_endpoints_cors() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("OPTIONS")
            .path("/api/leaderboard")
            .header("origin", "http://localhost:4200")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin")
        );
    }
}
