//! 公社身份规范化 - 业务能力层
//!
//! 土地数据和森林数据没有共同的稳定键：土地侧的本地公社代码可靠，
//! 森林侧的代码不一定采用相同编号，因此需要按名称兜底匹配。
//! 两侧必须使用同一套规范化规则。

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 复合匹配键：(本地代码或空串, 规范化名称)
pub type CommuneKey = (String, String);

/// 规范化地名：去除变音符号，连字符和撇号转空格，合并空白，统一小写
///
/// 例如 `"Saint-Étienne"` 和 `"SAINT ETIENNE"` 都得到 `"saint etienne"`。
pub fn normalize_name(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | '\'' | '\u{2019}' => ' ',
            other => other,
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 构建复合匹配键
pub fn commune_key(code: Option<&str>, name: &str) -> CommuneKey {
    (
        code.map(str::trim).unwrap_or_default().to_string(),
        normalize_name(name),
    )
}

/// 由省份代码和本地公社代码拼接 INSEE 代码；本地代码缺失或为空时没有 INSEE 代码
///
/// 省份代码固定两位，因此不同的 (省份, 本地代码) 组合不会拼出相同结果。
pub fn build_insee_code(department_code: &str, commune_code: Option<&str>) -> Option<String> {
    let commune_code = commune_code?.trim();
    if commune_code.is_empty() {
        return None;
    }
    Some(format!("{}{}", department_code, commune_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritics_case_and_punctuation() {
        assert_eq!(normalize_name("Saint-Étienne"), "saint etienne");
        assert_eq!(normalize_name("SAINT ETIENNE"), "saint etienne");
        assert_eq!(normalize_name("L'Haÿ-les-Roses"), "l hay les roses");
        assert_eq!(normalize_name("L’Île-d’Yeu"), "l ile d yeu");
        assert_eq!(normalize_name("  Châteauneuf -- du\u{a0}Pape "), "chateauneuf du pape");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in [
            "Saint-Étienne",
            "Œuilly",
            "Ménil-Hubert-en-Exmes",
            "L’Abergement-Clémenciat",
            "İstanbul",
            "",
        ] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once, "{}", name);
        }
    }

    #[test]
    fn test_commune_key_trims_code() {
        assert_eq!(
            commune_key(Some(" 001 "), "Alpha"),
            ("001".to_string(), "alpha".to_string())
        );
        assert_eq!(
            commune_key(None, "Bêta"),
            (String::new(), "beta".to_string())
        );
    }

    #[test]
    fn test_insee_code_construction() {
        assert_eq!(build_insee_code("29", Some("019")), Some("29019".to_string()));
        assert_eq!(build_insee_code("29", Some(" 019 ")), Some("29019".to_string()));
        assert_eq!(build_insee_code("29", Some("")), None);
        assert_eq!(build_insee_code("29", Some("  ")), None);
        assert_eq!(build_insee_code("29", None), None);

        // 两位省份代码保证拼接结果不冲突
        assert_ne!(build_insee_code("01", Some("234")), build_insee_code("12", Some("34")));
    }
}
