//! MyInterfaceFactory - MyInterface実装の Factory Pattern 実装

use super::ComponentFactory;
use crate::core::ComponentConfig;
use crate::my_interface::{class_a::ClassA, MyInterface};
use anyhow::Result;

pub struct MyInterfaceFactory;

impl MyInterfaceFactory {
    /// ClassAを選択する実装名
    pub const CLASS_A: &'static str = "class_a";

    pub fn new() -> Self {
        Self
    }
}

impl Default for MyInterfaceFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// パラメータが未指定または空オブジェクトかどうか
fn has_no_parameters(parameters: &serde_json::Value) -> bool {
    match parameters {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl ComponentFactory<Box<dyn MyInterface>> for MyInterfaceFactory {
    fn create(&self, config: &ComponentConfig) -> Result<Box<dyn MyInterface>> {
        match config.implementation.as_str() {
            Self::CLASS_A => {
                // ClassAの戻り値は固定
                if !has_no_parameters(&config.parameters) {
                    anyhow::bail!(
                        "ClassAはパラメータを受け付けません: {}",
                        config.parameters
                    );
                }
                Ok(Box::new(ClassA::new()))
            }
            _ => anyhow::bail!(
                "未サポートのMyInterface実装: {}. 利用可能: {}",
                config.implementation,
                self.available_implementations().join(", ")
            ),
        }
    }

    fn available_implementations(&self) -> Vec<String> {
        vec![Self::CLASS_A.to_string()]
    }

    fn get_description(&self, implementation: &str) -> Option<String> {
        match implementation {
            Self::CLASS_A => Some("固定メッセージを返す本物のClassA".to_string()),
            _ => None,
        }
    }
}
