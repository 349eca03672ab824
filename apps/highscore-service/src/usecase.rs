//! # ユースケース層
//!
//! Highscore Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラはトレイト経由でユースケースを呼び出す
//! - **依存性注入**: リポジトリを外部から注入
//! - **検証が先**: 入力の検証はリポジトリ呼び出しより前に完了させる

pub mod highscore;

use async_trait::async_trait;
use highscore_domain::{highscore::HighscoreRecord, score::ScoreKind};
pub use highscore::{HighscoreUseCaseImpl, PushInput};

use crate::error::HighscoreError;

/// ハイスコアユースケーストレイト
#[async_trait]
pub trait HighscoreUseCase: Send + Sync {
    /// このサービスが扱うスコア種別
    fn kind(&self) -> ScoreKind;

    /// ハイスコアを登録する
    ///
    /// 検証に失敗した場合はリポジトリを呼び出さない。
    async fn push(&self, input: PushInput) -> Result<HighscoreRecord, HighscoreError>;

    /// ランキングを取得する
    ///
    /// `level` が `None` または空文字列の場合は全レベルを対象にする。
    async fn ranking(&self, level: Option<&str>) -> Result<Vec<HighscoreRecord>, HighscoreError>;
}

/// HighscoreUseCaseImpl に HighscoreUseCase トレイトを実装
#[async_trait]
impl HighscoreUseCase for HighscoreUseCaseImpl {
    fn kind(&self) -> ScoreKind {
        self.kind()
    }

    async fn push(&self, input: PushInput) -> Result<HighscoreRecord, HighscoreError> {
        self.push(input).await
    }

    async fn ranking(&self, level: Option<&str>) -> Result<Vec<HighscoreRecord>, HighscoreError> {
        self.ranking(level).await
    }
}
