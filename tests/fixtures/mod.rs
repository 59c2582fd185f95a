// 統合テスト共通のフィクスチャ

pub mod mocks;

pub use mocks::*;
