use phf::phf_map;

/// 科目枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// 憲法
    Kenpo,
    /// 民法
    Minpo,
    /// 商法
    Shoho,
    /// 刑法
    Keiho,
    /// 民事訴訟法
    Minsoho,
    /// 刑事訴訟法
    Keisoho,
}

/// 文件名中的科目代码 → 科目
static SUBJECT_CODES: phf::Map<&'static str, Subject> = phf_map! {
    "kenpo" => Subject::Kenpo,
    "minpo" => Subject::Minpo,
    "shoho" => Subject::Shoho,
    "keiho" => Subject::Keiho,
    "minsoho" => Subject::Minsoho,
    "keisoho" => Subject::Keisoho,
};

/// 首页表格中的科目显示顺序
pub const SUBJECT_ORDER: [Subject; 6] = [
    Subject::Kenpo,
    Subject::Minpo,
    Subject::Shoho,
    Subject::Keiho,
    Subject::Minsoho,
    Subject::Keisoho,
];

impl Subject {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Subject::Kenpo => "憲法",
            Subject::Minpo => "民法",
            Subject::Shoho => "商法",
            Subject::Keiho => "刑法",
            Subject::Minsoho => "民事訴訟法",
            Subject::Keisoho => "刑事訴訟法",
        }
    }

    /// 从科目代码解析科目
    pub fn from_code(code: &str) -> Option<Self> {
        SUBJECT_CODES.get(code).copied()
    }

    /// 从标准名称解析科目（精确匹配）
    pub fn from_name(name: &str) -> Option<Self> {
        SUBJECT_ORDER.iter().copied().find(|s| s.name() == name)
    }

    /// 在显示顺序中的位置
    pub fn rank(self) -> usize {
        SUBJECT_ORDER
            .iter()
            .position(|s| *s == self)
            .unwrap_or(SUBJECT_ORDER.len())
    }
}

/// 科目代码 → 显示名称，未知代码原样返回
pub fn subject_label(code: &str) -> String {
    Subject::from_code(code)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// 按显示名称排序用的键：已知科目按固定顺序，未知科目排在其后并按名称排序
pub fn display_order_key(label: &str) -> (usize, &str) {
    match Subject::from_name(label) {
        Some(subject) => (subject.rank(), ""),
        None => (SUBJECT_ORDER.len(), label),
    }
}
