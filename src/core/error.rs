// 設定・依存関係注入レイヤーのエラー型定義
// MyInterface::f / ClassB::g の委譲経路自体はエラーを持たない

use thiserror::Error;

/// 依存関係の構築時に発生するエラー型
#[derive(Error, Debug)]
pub enum DelegationError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("未サポートの{component}実装: {implementation}. 利用可能: {available}")]
    UnsupportedImplementation {
        component: String,
        implementation: String,
        available: String,
    },

    #[error("依存関係注入エラー: {message}")]
    DependencyInjectionError { message: String },
}

impl DelegationError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 未サポート実装エラーの作成
    pub fn unsupported(
        component: impl Into<String>,
        implementation: impl Into<String>,
        available: &[String],
    ) -> Self {
        Self::UnsupportedImplementation {
            component: component.into(),
            implementation: implementation.into(),
            available: available.join(", "),
        }
    }

    /// 依存関係注入エラーの作成
    pub fn dependency_injection(message: impl Into<String>) -> Self {
        Self::DependencyInjectionError {
            message: message.into(),
        }
    }

    /// 設定を直せば回復できるかどうか
    pub fn is_configuration_issue(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError { .. } | Self::UnsupportedImplementation { .. }
        )
    }
}

/// 依存関係構築の結果型
pub type DelegationResult<T> = Result<T, DelegationError>;
