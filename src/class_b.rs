//! MyInterfaceに処理を委譲するコンシューマ

use crate::my_interface::MyInterface;

/// 注入されたMyInterfaceの結果をそのまま返す
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassB;

impl ClassB {
    pub fn new() -> Self {
        Self
    }

    /// `a.f()` の結果を加工せずに返す
    ///
    /// 具象型でも `dyn MyInterface` でも受け取れる
    #[tracing::instrument(skip_all)]
    pub fn g<T>(&self, a: &T) -> String
    where
        T: MyInterface + ?Sized,
    {
        let result = a.f();
        tracing::debug!(len = result.len(), "delegated to MyInterface::f");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_interface::class_a::ClassA;
    use crate::my_interface::MockMyInterface;

    #[test]
    fn test_g_using_class_a() {
        // Arrange
        let class_a = ClassA::new();
        let class_b = ClassB::new();

        // Act
        let result = class_b.g(&class_a);

        // Assert
        assert_eq!(result, "I am a real class A");
    }

    #[test]
    fn test_g_using_mock_class_a() {
        // Arrange
        let mut mock_my_interface = MockMyInterface::new();
        mock_my_interface
            .expect_f()
            .times(1)
            .return_const("I am a mock of class A".to_string());
        let class_b = ClassB::new();

        // Act
        let result = class_b.g(&mock_my_interface);

        // Assert
        assert_eq!(result, "I am a mock of class A");
    }

    #[test]
    fn test_g_does_not_alter_text() {
        let inputs = ["", "  padded  ", "MiXeD Case", "改行\nを含む", "🚀"];

        for input in inputs {
            let mut mock = MockMyInterface::new();
            mock.expect_f().times(1).return_const(input.to_string());

            assert_eq!(ClassB::new().g(&mock), input);
        }
    }

    #[test]
    fn test_g_is_idempotent() {
        let mut mock = MockMyInterface::new();
        mock.expect_f()
            .times(3)
            .returning(|| "stable".to_string());
        let class_b = ClassB::new();

        let results: Vec<String> = (0..3).map(|_| class_b.g(&mock)).collect();

        assert!(results.iter().all(|r| r == "stable"));
    }

    #[test]
    fn test_g_with_trait_object() {
        let provider: Box<dyn MyInterface> = Box::new(ClassA::new());

        assert_eq!(ClassB::new().g(&provider), "I am a real class A");
        assert_eq!(ClassB::new().g(provider.as_ref()), "I am a real class A");
    }
}
