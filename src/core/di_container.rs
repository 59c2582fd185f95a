//! 設定駆動のDIコンテナ
//!
//! JSON設定からMyInterfaceの実装を選択し、ClassBと組み合わせたAppを構築する

use crate::core::{DelegationError, DelegationResult};
use crate::factories::{ComponentFactory, MyInterfaceFactory};
use crate::my_interface::MyInterface;
use crate::App;
use serde::{Deserialize, Serialize};

/// DIコンテナ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyConfig {
    pub my_interface: ComponentConfig,
}

/// 各コンポーネントの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub implementation: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl ComponentConfig {
    pub fn new(implementation: &str, parameters: serde_json::Value) -> Self {
        Self {
            implementation: implementation.to_string(),
            parameters,
        }
    }
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            my_interface: ComponentConfig::new(MyInterfaceFactory::CLASS_A, serde_json::json!({})),
        }
    }
}

impl DependencyConfig {
    /// JSON文字列から設定を読み込み、バリデーションまで行う
    pub fn from_json_str(json: &str) -> DelegationResult<Self> {
        let config: DependencyConfig = serde_json::from_str(json)
            .map_err(|e| DelegationError::configuration(format!("設定解析エラー: {e}")))?;

        config.validate()?;

        Ok(config)
    }

    /// 設定をバリデーション
    pub fn validate(&self) -> DelegationResult<()> {
        self.validate_my_interface()
    }

    fn validate_my_interface(&self) -> DelegationResult<()> {
        let factory = MyInterfaceFactory::new();
        let available = factory.available_implementations();

        if !available.contains(&self.my_interface.implementation) {
            tracing::warn!(
                implementation = %self.my_interface.implementation,
                "rejected MyInterface implementation"
            );
            return Err(DelegationError::unsupported(
                "MyInterface",
                &self.my_interface.implementation,
                &available,
            ));
        }

        Ok(())
    }
}

/// DIコンテナ - 設定に従って依存関係を解決する
#[derive(Debug, Clone)]
pub struct DIContainer {
    config: DependencyConfig,
}

impl DIContainer {
    /// バリデーション済みの設定からDIコンテナを作成
    pub fn new(config: DependencyConfig) -> DelegationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// デフォルト設定（ClassA）でDIコンテナを作成
    pub fn with_default_config() -> Self {
        Self {
            config: DependencyConfig::default(),
        }
    }

    /// JSON文字列からDIコンテナを作成
    pub fn from_json_str(json: &str) -> DelegationResult<Self> {
        let config = DependencyConfig::from_json_str(json)?;
        Ok(Self { config })
    }

    /// MyInterfaceの実装を作成
    pub fn create_my_interface(&self) -> DelegationResult<Box<dyn MyInterface>> {
        let factory = MyInterfaceFactory::new();
        let provider = factory.create(&self.config.my_interface).map_err(|e| {
            DelegationError::dependency_injection(format!("MyInterface作成エラー: {e}"))
        })?;

        tracing::debug!(
            implementation = %self.config.my_interface.implementation,
            "created MyInterface provider"
        );
        Ok(provider)
    }

    /// 設定で選ばれた実装を注入したAppを作成
    pub fn create_app(&self) -> DelegationResult<App<Box<dyn MyInterface>>> {
        Ok(App::new(self.create_my_interface()?))
    }

    /// 設定を取得
    pub fn config(&self) -> &DependencyConfig {
        &self.config
    }
}
