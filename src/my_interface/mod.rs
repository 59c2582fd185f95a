use mockall::automock;

pub mod class_a;

/// 文字列を返す単一の操作を持つインターフェース
#[automock]
pub trait MyInterface: Send + Sync {
    /// 実装ごとの文字列を返す
    fn f(&self) -> String;
}

// MyInterface for Box<dyn MyInterface>
impl MyInterface for Box<dyn MyInterface> {
    fn f(&self) -> String {
        self.as_ref().f()
    }
}
