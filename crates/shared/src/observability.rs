//! # Observability 基盤
//!
//! ログの出力形式とフィルタを環境変数から組み立て、subscriber を登録する。
//!
//! | 変数名 | 説明 |
//! |--------|------|
//! | `RUST_LOG` | ログフィルタ（未設定時は [`DEFAULT_LOG_FILTER`]） |
//! | `LOG_FORMAT` | `json` または `pretty`（未設定・不正な値は `pretty`） |
//!
//! 不正な `LOG_FORMAT` は設定に保持しておき、subscriber 登録後に警告ログとして出す。

use std::env;

/// `RUST_LOG` 未設定時のログフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,highscore=debug,tower_http=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON（本番環境向け）
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `json` / `pretty` を受け付ける。大文字小文字は区別する。
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// [`app_span`](Self::app_span) の `service` フィールドに出力する
    pub service_name:    String,
    pub log_format:      LogFormat,
    /// `EnvFilter` のディレクティブ
    pub filter:          String,
    /// 解釈できなかった `LOG_FORMAT` の値
    pub rejected_format: Option<String>,
}

impl TracingConfig {
    /// 環境変数から設定を読み取る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |key| env::var(key).ok())
    }

    /// キーから値を引く関数を使って設定を組み立てる
    ///
    /// 空文字列の値は未設定として扱う。
    pub fn from_lookup<F>(service_name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (log_format, rejected_format) = match get("LOG_FORMAT") {
            None => (LogFormat::default(), None),
            Some(raw) => match LogFormat::parse(raw.trim()) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            service_name: service_name.into(),
            log_format,
            filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            rejected_format,
        }
    }

    /// サービス全体を包むスパン
    ///
    /// `main` で起動処理とサーバーをこのスパンの中で動かす。
    pub fn app_span(&self) -> tracing::Span {
        tracing::info_span!("app", service = %self.service_name)
    }
}

/// トレーシングを初期化する
///
/// JSON モードでは `timestamp`, `level`, `target`, `message` が
/// トップレベルに出力される。フィルタが解釈できない場合は
/// [`DEFAULT_LOG_FILTER`] で登録して警告を出す。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let (env_filter, filter_error) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_error::ErrorLayer::default())
        .with(fmt_layer)
        .init();

    if let Some(e) = filter_error {
        tracing::warn!(
            filter = %config.filter,
            error = %e,
            "RUST_LOG を解釈できないためデフォルトのフィルタを使用します"
        );
    }
    if let Some(raw) = &config.rejected_format {
        tracing::warn!(value = %raw, "未知の LOG_FORMAT のため pretty で出力します");
    }
}
