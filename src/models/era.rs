//! 元号（和暦）标签
//!
//! 元号代码由一个字母和两位数字组成，例如 `s60` 表示昭和60年。

use phf::phf_map;

/// 元号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    /// 昭和
    Showa,
    /// 平成
    Heisei,
}

static ERA_LETTERS: phf::Map<char, Era> = phf_map! {
    's' => Era::Showa,
    'h' => Era::Heisei,
};

impl Era {
    /// 获取元号名称
    pub fn name(self) -> &'static str {
        match self {
            Era::Showa => "昭和",
            Era::Heisei => "平成",
        }
    }

    /// 从代码首字母解析元号
    pub fn from_letter(letter: char) -> Option<Self> {
        ERA_LETTERS.get(&letter).copied()
    }
}

/// 把元号代码渲染为标签
///
/// # 参数
/// - `code`: 元号代码，如 `s60`
/// - `suffix`: 后缀，`年` 或 `年度`
///
/// # 返回
/// 例如 `昭和60年度`；未知字母原样保留，数字部分去掉前导零
pub fn era_label(code: &str, suffix: &str) -> String {
    let mut chars = code.chars();
    let Some(letter) = chars.next() else {
        return suffix.to_string();
    };
    let era = Era::from_letter(letter)
        .map(|e| e.name().to_string())
        .unwrap_or_else(|| letter.to_string());
    let rest = chars.as_str();
    let number = rest
        .parse::<u32>()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| rest.to_string());
    format!("{}{}{}", era, number, suffix)
}
