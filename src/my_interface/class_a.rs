use super::MyInterface;

/// ClassAが返す固定メッセージ
pub const CLASS_A_MESSAGE: &str = "I am a real class A";

/// MyInterfaceの本物の実装
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassA;

impl ClassA {
    pub fn new() -> Self {
        Self
    }
}

impl MyInterface for ClassA {
    fn f(&self) -> String {
        CLASS_A_MESSAGE.to_string()
    }
}
