// テスト用のモック生成ヘルパー
#![allow(dead_code)]

// mockallの自動生成されたMockMyInterfaceを使用

use interface_delegation::my_interface::MockMyInterface;

/// ClassAのモックが返すメッセージ
pub const MOCK_CLASS_A_MESSAGE: &str = "I am a mock of class A";

/// `f`がちょうど`times`回呼ばれ、`text`を返すモックを作成
pub fn mock_returning(text: &str, times: usize) -> MockMyInterface {
    let mut mock = MockMyInterface::new();
    mock.expect_f().times(times).return_const(text.to_string());
    mock
}

/// ClassAの代わりとなるモックを作成
pub fn mock_class_a(times: usize) -> MockMyInterface {
    mock_returning(MOCK_CLASS_A_MESSAGE, times)
}
