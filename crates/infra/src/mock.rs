//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! highscore-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use highscore_domain::highscore::{HighscoreId, HighscoreRecord, NewHighscore, RankingQuery};

use crate::{error::InfraError, repository::HighscoreRepository};

// ===== MockHighscoreRepository =====

/// インメモリの HighscoreRepository
///
/// 採番は 1 から始まる連番。`failing()` で作成すると
/// すべての操作がデータベースエラーを返す。
#[derive(Clone, Default)]
pub struct MockHighscoreRepository {
    records: Arc<Mutex<Vec<HighscoreRecord>>>,
    failing: bool,
}

impl MockHighscoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての操作が失敗するリポジトリを作成する
    pub fn failing() -> Self {
        Self {
            records: Arc::default(),
            failing: true,
        }
    }

    /// 記録を直接追加する（テストデータの準備用）
    pub fn add_record(&self, record: HighscoreRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// 保存されている記録のスナップショットを返す（登録順）
    pub fn records(&self) -> Vec<HighscoreRecord> {
        self.records.lock().unwrap().clone()
    }

    /// 保存されている記録の件数
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl HighscoreRepository for MockHighscoreRepository {
    async fn insert(&self, highscore: &NewHighscore) -> Result<HighscoreRecord, InfraError> {
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut.into());
        }

        let mut records = self.records.lock().unwrap();
        let next_id = records
            .iter()
            .map(|r| r.id().as_i64())
            .max()
            .unwrap_or(0)
            + 1;
        let record = HighscoreRecord::new(HighscoreId::from_i64(next_id), highscore.clone());
        records.push(record.clone());
        Ok(record)
    }

    async fn find_ranked(&self, query: &RankingQuery) -> Result<Vec<HighscoreRecord>, InfraError> {
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut.into());
        }

        let mut matched: Vec<HighscoreRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        matched.sort_by(HighscoreRecord::rank_cmp);
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use highscore_domain::{
        score::{ScoreKind, ScoreValue},
        value_objects::{LevelId, PlayerName},
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn new_highscore(name: &str, level: &str, value: ScoreValue) -> NewHighscore {
        NewHighscore {
            game: None,
            name: PlayerName::new(name).unwrap(),
            level: LevelId::new(level).unwrap(),
            value,
        }
    }

    #[tokio::test]
    async fn test_insertは1から連番を採番する() {
        let sut = MockHighscoreRepository::new();

        let first = sut
            .insert(&new_highscore("a", "l1", ScoreValue::Score(1)))
            .await
            .unwrap();
        let second = sut
            .insert(&new_highscore("b", "l1", ScoreValue::Score(2)))
            .await
            .unwrap();

        assert_eq!(first.id().as_i64(), 1);
        assert_eq!(second.id().as_i64(), 2);
        assert_eq!(sut.len(), 2);
    }

    #[tokio::test]
    async fn test_find_rankedは順位順に返す() {
        let sut = MockHighscoreRepository::new();
        for (name, score) in [("a", 10), ("b", 30), ("c", 20)] {
            sut.insert(&new_highscore(name, "l1", ScoreValue::Score(score)))
                .await
                .unwrap();
        }

        let query = RankingQuery {
            kind:  ScoreKind::Score,
            game:  None,
            level: Some(LevelId::new("l1").unwrap()),
        };
        let result = sut.find_ranked(&query).await.unwrap();

        let names: Vec<&str> = result.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_failingはデータベースエラーを返す() {
        let sut = MockHighscoreRepository::failing();

        let result = sut
            .insert(&new_highscore("a", "l1", ScoreValue::Score(1)))
            .await;

        assert!(matches!(
            result.unwrap_err().kind(),
            crate::InfraErrorKind::Database(_)
        ));
        assert!(sut.is_empty());
    }
}
