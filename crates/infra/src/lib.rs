//! # Highscore インフラ層
//!
//! PostgreSQL との接続とハイスコア記録の永続化を担当する。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトとその PostgreSQL 実装を提供する。
//! ユースケース層はトレイト経由でのみ永続化にアクセスし、
//! テストではインメモリの [`mock`] 実装に差し替える。
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールの作成、マイグレーション、疎通確認
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `mock` - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use highscore_infra::{db, repository::PostgresHighscoreRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/highscore", 10).await?;
//!     db::run_migrations(&pool).await?;
//!     let repository = PostgresHighscoreRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
