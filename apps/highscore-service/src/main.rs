//! # Highscore Service サーバー
//!
//! ゲームクライアント向けのハイスコア登録・ランキング取得サービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HIGHSCORE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `HIGHSCORE_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | 接続プールの最大接続数（デフォルト: `10`） |
//! | `HIGHSCORE_MODE` | No | `score`（降順）または `time`（昇順） |
//! | `HIGHSCORE_GAME` | No | 記録に付与するゲームタグ |
//! | `HIGHSCORE_CORS_ORIGIN` | No | CORS 許可オリジン（`*` で全許可） |
//! | `HIGHSCORE_RUN_MIGRATIONS` | No | 起動時マイグレーション（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! # 得点制
//! DATABASE_URL=postgres://... cargo run -p highscore-service
//!
//! # タイムアタック
//! HIGHSCORE_MODE=time DATABASE_URL=postgres://... cargo run -p highscore-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use highscore_infra::{
    db,
    repository::{HighscoreRepository, PostgresHighscoreRepository},
};
use highscore_service::{
    app_builder::build_app,
    config::HighscoreConfig,
    handler::{HighscoreState, ReadinessState},
    usecase::HighscoreUseCaseImpl,
};
use highscore_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tracing::Instrument as _;

/// Highscore Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("highscore-service");
    init_tracing(&tracing_config);

    run().instrument(tracing_config.app_span()).await
}

/// 設定読み込みからサーバー停止まで
async fn run() -> anyhow::Result<()> {
    // 設定読み込み
    let config = HighscoreConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        mode = %config.mode,
        game = config.game.as_ref().map(|g| g.as_str()),
        "Highscore Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url, config.max_connections)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    if config.run_migrations {
        db::run_migrations(&pool)
            .await
            .context("マイグレーションの実行に失敗しました")?;
        tracing::info!("マイグレーションを適用しました");
    }

    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    // 依存コンポーネントを初期化
    let repository: Arc<dyn HighscoreRepository> =
        Arc::new(PostgresHighscoreRepository::new(pool));
    let usecase = HighscoreUseCaseImpl::new(repository, config.mode, config.game.clone());
    let highscore_state = Arc::new(HighscoreState {
        usecase: Arc::new(usecase),
    });

    let app = build_app(highscore_state, readiness_state, config.cors_origin.as_ref());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Highscore Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Highscore Service サーバーを停止しました");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
        tracing::info!("Ctrl-C を受信しました");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("SIGTERM を受信しました");
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
