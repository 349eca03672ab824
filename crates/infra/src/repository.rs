//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **パラメータ化クエリ**: 値はすべて `bind` で渡し、SQL 文字列に埋め込まない
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod highscore_repository;

pub use highscore_repository::{HighscoreRepository, PostgresHighscoreRepository};
