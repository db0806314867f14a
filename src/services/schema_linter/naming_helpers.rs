// 命名チェックのヘルパー関数
//
// チェッカー間で共通の名前判定をユーティリティ関数として提供します。

/// 名前が小文字ASCIIのみで構成されているかを判定する。
///
/// 大文字ASCIIや非ASCII文字を含む名前、空の名前は不正とみなす。
/// 数字やアンダースコアなどの大文字・小文字を持たない文字は許可する。
pub fn is_lowercase_ascii(name: &str) -> bool {
    !name.is_empty() && name.is_ascii() && !name.bytes().any(|b| b.is_ascii_uppercase())
}

/// 名前が指定されたプレフィックスで始まるかを、ASCIIの大文字・小文字を区別せずに判定する。
pub fn has_prefix_ignore_ascii_case(name: &str, prefix: &str) -> bool {
    let name = name.as_bytes();
    let prefix = prefix.as_bytes();
    name.len() >= prefix.len() && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_lowercase_ascii_accepts_lowercase() {
        assert!(is_lowercase_ascii("students"));
        assert!(is_lowercase_ascii("course_2024"));
        assert!(is_lowercase_ascii("_tmp"));
        assert!(is_lowercase_ascii("42"));
    }

    #[test]
    fn test_is_lowercase_ascii_rejects_uppercase() {
        assert!(!is_lowercase_ascii("Students"));
        assert!(!is_lowercase_ascii("courseID"));
        assert!(!is_lowercase_ascii("ALLCAPS"));
    }

    #[test]
    fn test_is_lowercase_ascii_rejects_non_ascii() {
        assert!(!is_lowercase_ascii("студенты"));
        assert!(!is_lowercase_ascii("café"));
    }

    #[test]
    fn test_is_lowercase_ascii_rejects_empty() {
        assert!(!is_lowercase_ascii(""));
    }

    #[test]
    fn test_has_prefix_ignore_ascii_case() {
        assert!(has_prefix_ignore_ascii_case("pk_students", "pk_"));
        assert!(has_prefix_ignore_ascii_case("PK_Students", "pk_"));
        assert!(!has_prefix_ignore_ascii_case("students_pk", "pk_"));
        assert!(!has_prefix_ignore_ascii_case("pk", "pk_"));
        assert!(!has_prefix_ignore_ascii_case("", "pk_"));
        // マルチバイト文字の途中で切ってもパニックしない
        assert!(!has_prefix_ignore_ascii_case("ключ", "pk_"));
    }
}
