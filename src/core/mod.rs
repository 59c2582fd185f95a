// コアレイヤー - エラー定義と設定駆動のDIコンテナ

pub mod di_container;
pub mod error;

// 公開API
pub use di_container::{ComponentConfig, DIContainer, DependencyConfig};
pub use error::{DelegationError, DelegationResult};
