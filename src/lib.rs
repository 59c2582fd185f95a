pub mod class_b;
pub mod core;
pub mod factories;
pub mod my_interface;

use class_b::ClassB;
use my_interface::{class_a::ClassA, MyInterface};

// DIコンテナの役割を果たすジェネリックなApp構造体
// 具象型を渡せば静的ディスパッチ、Box<dyn MyInterface>を渡せば動的ディスパッチになる
pub struct App<A>
where
    A: MyInterface,
{
    pub provider: A,
    pub consumer: ClassB,
}

impl<A> App<A>
where
    A: MyInterface,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(provider: A) -> Self {
        Self {
            provider,
            consumer: ClassB::new(),
        }
    }

    /// 注入されたproviderをClassBに渡した結果を返す
    pub fn run(&self) -> String {
        self.consumer.g(&self.provider)
    }
}

impl App<ClassA> {
    /// 本物のClassAを注入したApp
    pub fn with_class_a() -> Self {
        Self::new(ClassA::new())
    }
}
