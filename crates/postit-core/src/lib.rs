//! postit-core
//!
//! Core building blocks for the PostIt upload client.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, request, outcome, state, attempt）
//! - **ports**: 抽象化レイヤー（Transport, DocumentSource, Notifier, Clock）
//! - **app**: アプリケーションロジック（task, ticker, coordinator）
//! - **impls**: 実装（HttpTransport など本番用）
//!
//! The flow for one invocation: a [`app::UploadCoordinator`] validates the
//! active document, spawns one [`app::UploadHandle`] that performs a single
//! form-encoded POST, drives a progress ticker while the task runs, and
//! renders the terminal [`domain::UploadOutcome`] as exactly one user-visible
//! notification.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
