//! # HighscoreRepository
//!
//! ハイスコア記録の登録とランキング取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **追記のみ**: INSERT と SELECT のみを発行する
//! - **種別ごとのテーブル**: `score_highscores`（降順）/ `time_highscores`（昇順）
//! - **実行時クエリ**: SQL はスコア種別ごとの定数で、値は `bind` で渡す
//! - **スコープ付き接続**: メソッドごとにプールから接続を借り、ドロップで返却する

use async_trait::async_trait;
use highscore_domain::{
    highscore::{HighscoreId, HighscoreRecord, NewHighscore, RankingQuery},
    score::{ScoreKind, ScoreValue},
    value_objects::{GameTag, LevelId, PlayerName},
};
use sqlx::PgPool;

use crate::error::InfraError;

/// ハイスコアリポジトリトレイト
#[async_trait]
pub trait HighscoreRepository: Send + Sync {
    /// ハイスコアを 1 件登録し、採番済みの記録を返す
    ///
    /// 登録先のテーブルは `highscore.value` の種別で決まる。
    async fn insert(&self, highscore: &NewHighscore) -> Result<HighscoreRecord, InfraError>;

    /// 条件に一致する記録を順位順に取得する
    ///
    /// 並び順はスコア種別に従い、同値の場合は ID の昇順。
    /// 一致する記録がない場合は空の Vec を返す。
    async fn find_ranked(&self, query: &RankingQuery) -> Result<Vec<HighscoreRecord>, InfraError>;
}

// =============================================================================
// SQL
// =============================================================================

const INSERT_SCORE: &str = r#"
    INSERT INTO score_highscores (game, name, level, score)
    VALUES ($1, $2, $3, $4)
    RETURNING id
"#;

const INSERT_TIME: &str = r#"
    INSERT INTO time_highscores (game, name, level, time)
    VALUES ($1, $2, $3, $4)
    RETURNING id
"#;

const SELECT_SCORE_RANKING: &str = r#"
    SELECT id, game, name, level, score
    FROM score_highscores
    WHERE ($1::VARCHAR IS NULL OR game = $1)
      AND ($2::VARCHAR IS NULL OR level = $2)
    ORDER BY score DESC, id ASC
"#;

const SELECT_TIME_RANKING: &str = r#"
    SELECT id, game, name, level, time
    FROM time_highscores
    WHERE ($1::VARCHAR IS NULL OR game = $1)
      AND ($2::VARCHAR IS NULL OR level = $2)
    ORDER BY time ASC, id ASC
"#;

// =============================================================================
// 行の型
// =============================================================================

/// `score_highscores` の行
#[derive(Debug, sqlx::FromRow)]
struct ScoreRow {
    id:    i64,
    game:  Option<String>,
    name:  String,
    level: String,
    score: i32,
}

/// `time_highscores` の行
#[derive(Debug, sqlx::FromRow)]
struct TimeRow {
    id:    i64,
    game:  Option<String>,
    name:  String,
    level: String,
    time:  f64,
}

impl TryFrom<ScoreRow> for HighscoreRecord {
    type Error = InfraError;

    fn try_from(row: ScoreRow) -> Result<Self, Self::Error> {
        let value =
            ScoreValue::score(row.score).map_err(|e| InfraError::unexpected(e.to_string()))?;
        Ok(HighscoreRecord::from_db(
            HighscoreId::from_i64(row.id),
            row.game.map(GameTag::from_db),
            PlayerName::from_db(row.name),
            LevelId::from_db(row.level),
            value,
        ))
    }
}

impl TryFrom<TimeRow> for HighscoreRecord {
    type Error = InfraError;

    fn try_from(row: TimeRow) -> Result<Self, Self::Error> {
        let value = ScoreValue::time(row.time).map_err(|e| InfraError::unexpected(e.to_string()))?;
        Ok(HighscoreRecord::from_db(
            HighscoreId::from_i64(row.id),
            row.game.map(GameTag::from_db),
            PlayerName::from_db(row.name),
            LevelId::from_db(row.level),
            value,
        ))
    }
}

// =============================================================================
// PostgreSQL 実装
// =============================================================================

/// PostgreSQL 実装の HighscoreRepository
#[derive(Debug, Clone)]
pub struct PostgresHighscoreRepository {
    pool: PgPool,
}

impl PostgresHighscoreRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HighscoreRepository for PostgresHighscoreRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(level = %highscore.level))]
    async fn insert(&self, highscore: &NewHighscore) -> Result<HighscoreRecord, InfraError> {
        let mut conn = self.pool.acquire().await?;

        let game = highscore.game.as_ref().map(GameTag::as_str);
        let name = highscore.name.as_str();
        let level = highscore.level.as_str();

        let id: i64 = match highscore.value {
            ScoreValue::Score(score) => {
                sqlx::query_scalar::<_, i64>(INSERT_SCORE)
                    .bind(game)
                    .bind(name)
                    .bind(level)
                    .bind(score)
                    .fetch_one(&mut *conn)
                    .await?
            }
            ScoreValue::Time(time) => {
                sqlx::query_scalar::<_, i64>(INSERT_TIME)
                    .bind(game)
                    .bind(name)
                    .bind(level)
                    .bind(time)
                    .fetch_one(&mut *conn)
                    .await?
            }
        };

        tracing::debug!(id, "ハイスコアを登録しました");
        Ok(HighscoreRecord::new(
            HighscoreId::from_i64(id),
            highscore.clone(),
        ))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(kind = %query.kind))]
    async fn find_ranked(&self, query: &RankingQuery) -> Result<Vec<HighscoreRecord>, InfraError> {
        let mut conn = self.pool.acquire().await?;

        let game = query.game.as_ref().map(GameTag::as_str);
        let level = query.level.as_ref().map(LevelId::as_str);

        let records = match query.kind {
            ScoreKind::Score => sqlx::query_as::<_, ScoreRow>(SELECT_SCORE_RANKING)
                .bind(game)
                .bind(level)
                .fetch_all(&mut *conn)
                .await?
                .into_iter()
                .map(HighscoreRecord::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            ScoreKind::Time => sqlx::query_as::<_, TimeRow>(SELECT_TIME_RANKING)
                .bind(game)
                .bind(level)
                .fetch_all(&mut *conn)
                .await?
                .into_iter()
                .map(HighscoreRecord::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        };

        tracing::debug!(count = records.len(), "ランキングを取得しました");
        Ok(records)
    }
}
