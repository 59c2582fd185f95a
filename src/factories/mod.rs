//! ファクトリーモジュール - 設定からコンポーネントを生成する

pub mod my_interface_factory;

pub use my_interface_factory::MyInterfaceFactory;

use crate::core::ComponentConfig;
use anyhow::Result;

/// 設定からコンポーネントTを生成するファクトリー
pub trait ComponentFactory<T> {
    /// 設定に従ってコンポーネントを作成
    fn create(&self, config: &ComponentConfig) -> Result<T>;

    /// 利用可能な実装名の一覧
    fn available_implementations(&self) -> Vec<String>;

    /// 実装の説明
    fn get_description(&self, implementation: &str) -> Option<String>;
}
