//! # アプリケーション構築
//!
//! State を受け取り、ルーター構築とレイヤー適用を行う。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::CorsOrigin,
    handler::{HighscoreState, ReadinessState, health_check, highscore_endpoint, readiness_check},
};

/// ルーターを構築する
///
/// `cors_origin` が `None` の場合は CORS レイヤーを付けない。
pub fn build_app(
    highscore_state: Arc<HighscoreState>,
    readiness_state: Arc<ReadinessState>,
    cors_origin: Option<&CorsOrigin>,
) -> Router {
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route(
            "/highscore",
            get(highscore_endpoint).post(highscore_endpoint),
        )
        .with_state(highscore_state)
        .layer(TraceLayer::new_for_http());

    match cors_origin {
        Some(origin) => app.layer(cors_layer(origin)),
        None => app,
    }
}

/// 許可オリジンから CORS レイヤーを作成する
///
/// ブラウザ版のゲームクライアントから呼び出すため GET / POST を許可する。
pub fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    match origin {
        CorsOrigin::Any => layer.allow_origin(Any),
        CorsOrigin::Exact(value) => layer.allow_origin(value.clone()),
    }
}
