use crate::models::era::era_label;

/// 一道论文式试题
///
/// 每次运行都从源文件重新构建，标签从上一次生成的页面中恢复
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 科目代码，如 `kenpo`
    pub subject: String,
    /// 科目显示名称，如 `憲法`
    pub subject_label: String,
    /// 西历年份
    pub year: u32,
    /// 元号代码，如 `s60`
    pub era_code: String,
    /// 题号（从1开始）
    pub qnum: u32,
    /// 题目正文
    pub text: String,
    /// 输出文件名，如 `1985_s60_q1.md`
    pub slug: String,
    /// 数据集中的相对来源路径
    pub source: String,
    /// 从旧页面恢复的标签
    pub tags: Vec<String>,
}

impl Question {
    /// 输出文件名：`{year}_{era_code}_q{qnum}.md`
    pub fn make_slug(year: u32, era_code: &str, qnum: u32) -> String {
        format!("{}_{}_q{}.md", year, era_code, qnum)
    }

    /// 年度标签，如 `昭和60年度`
    pub fn era_label(&self) -> String {
        era_label(&self.era_code, "年度")
    }

    /// 年度列显示文本，如 `昭和60年度（1985年度）`
    pub fn year_label(&self) -> String {
        format!("{}（{}年度）", self.era_label(), self.year)
    }

    /// 题号标签，如 `第1問`
    pub fn qnum_label(&self) -> String {
        format!("第{}問", self.qnum)
    }

    /// 页面标题
    pub fn title(&self) -> String {
        format!(
            "{} 旧司法試験 論文式試験問題 {} {}",
            self.era_label(),
            self.subject_label,
            self.qnum_label()
        )
    }

    /// 去掉 `.md` 后缀的文件名，用于站点内链接
    pub fn slug_stem(&self) -> &str {
        self.slug.strip_suffix(".md").unwrap_or(&self.slug)
    }

    /// 换行替换为空格后的正文
    pub fn flat_text(&self) -> String {
        self.text.replace('\n', " ")
    }
}

#[cfg(test)]
pub(crate) fn sample(subject: &str, year: u32, era_code: &str, qnum: u32, text: &str) -> Question {
    Question {
        subject: subject.to_string(),
        subject_label: crate::models::subject::subject_label(subject),
        year,
        era_code: era_code.to_string(),
        qnum,
        text: text.to_string(),
        slug: Question::make_slug(year, era_code, qnum),
        source: format!("kyushi-ronbun/{}/kyushi_{}_{}_{}_q{}.txt", subject, subject, year, era_code, qnum),
        tags: Vec::new(),
    }
}
