//! # Highscore Service 設定
//!
//! 環境変数から Highscore Service サーバーの設定を読み込む。
//!
//! 値の解釈は [`HighscoreConfig::from_lookup`] に集約し、
//! 環境変数に依存せずテストできるようにしている。

use std::env;

use axum::http::HeaderValue;
use highscore_domain::{score::ScoreKind, value_objects::GameTag};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// CORS で許可するオリジン
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    /// すべてのオリジンを許可する（`*`）
    Any,
    /// 単一のオリジンのみ許可する
    Exact(HeaderValue),
}

/// Highscore Service サーバーの設定
#[derive(Debug, Clone)]
pub struct HighscoreConfig {
    /// バインドアドレス
    pub host:            String,
    /// ポート番号
    pub port:            u16,
    /// データベース接続 URL
    pub database_url:    String,
    /// 接続プールの最大接続数
    pub max_connections: u32,
    /// スコア種別（`score` / `time`）
    pub mode:            ScoreKind,
    /// 固定のゲームタグ（未設定ならゲームで絞り込まない）
    pub game:            Option<GameTag>,
    /// CORS 許可オリジン（未設定なら CORS レイヤーを付けない）
    pub cors_origin:     Option<CorsOrigin>,
    /// 起動時にマイグレーションを実行するか
    pub run_migrations:  bool,
}

impl HighscoreConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// キーから値を引く関数を使って設定を組み立てる
    ///
    /// 空文字列の値は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HIGHSCORE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("HIGHSCORE_PORT", get("HIGHSCORE_PORT"), DEFAULT_PORT)?;
        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name:  "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        let mode = parse_or("HIGHSCORE_MODE", get("HIGHSCORE_MODE"), ScoreKind::default())?;

        let game = get("HIGHSCORE_GAME")
            .map(|value| {
                GameTag::new(&value).map_err(|_| ConfigError::Invalid {
                    name: "HIGHSCORE_GAME",
                    value,
                })
            })
            .transpose()?;

        let cors_origin = get("HIGHSCORE_CORS_ORIGIN")
            .map(|value| parse_cors_origin(value.trim()))
            .transpose()?;

        let run_migrations = get("HIGHSCORE_RUN_MIGRATIONS")
            .map(|value| parse_bool("HIGHSCORE_RUN_MIGRATIONS", value))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
            mode,
            game,
            cors_origin,
            run_migrations,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}

fn parse_cors_origin(value: &str) -> Result<CorsOrigin, ConfigError> {
    if value == "*" {
        return Ok(CorsOrigin::Any);
    }
    HeaderValue::from_str(value)
        .map(CorsOrigin::Exact)
        .map_err(|_| ConfigError::Invalid {
            name:  "HIGHSCORE_CORS_ORIGIN",
            value: value.to_string(),
        })
}
