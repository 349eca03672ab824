//! # Highscore Service ライブラリ
//!
//! ゲームクライアントからハイスコアを受け取り、レベルごとのランキングを返す
//! HTTP サービス。`main.rs` と統合テストの両方から利用する。
//!
//! ## モジュール構成
//!
//! - [`config`]: 環境変数からの設定読み込み
//! - [`error`]: サービス固有のエラーと HTTP レスポンスへの変換
//! - [`handler`]: axum ハンドラ
//! - [`usecase`]: 入力検証とリポジトリ呼び出し
//! - [`app_builder`]: ルーター構築

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
