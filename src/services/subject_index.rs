//! 科目索引写入服务 - 业务能力层

use crate::error::{AppError, AppResult};
use crate::models::{subject_label, Question};
use std::collections::BTreeMap;
use std::path::Path;

/// 渲染科目索引：每个年度一行（新年度在前），行内按题号升序列出链接
pub fn render_subject_index(subject_code: &str, questions: &[Question]) -> String {
    let mut by_year: BTreeMap<u32, Vec<&Question>> = BTreeMap::new();
    for q in questions {
        by_year.entry(q.year).or_default().push(q);
    }

    let mut lines = vec![
        format!("# {}", subject_label(subject_code)),
        String::new(),
        "| 年度 | 問題 |".to_string(),
        "| --- | --- |".to_string(),
    ];

    for (year, mut group) in by_year.into_iter().rev() {
        // 年度标签取该年度第一道题的元号
        let era = group[0].era_label();
        group.sort_by_key(|q| q.qnum);
        let links = group
            .iter()
            .map(|q| format!("[{}]({})", q.qnum_label(), q.slug))
            .collect::<Vec<_>>()
            .join(" / ");
        lines.push(format!("| {}（{}年度） | {} |", era, year, links));
    }

    lines.join("\n").trim_end().to_string() + "\n"
}

/// 写入 `{subject_dir}/index.md`
pub fn write_subject_index(
    subject_dir: &Path,
    subject_code: &str,
    questions: &[Question],
) -> AppResult<()> {
    let target = subject_dir.join("index.md");
    let content = render_subject_index(subject_code, questions);
    std::fs::write(&target, content).map_err(|e| AppError::file_write_failed(&target, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::sample;

    #[test]
    fn test_years_descending_and_questions_ascending() {
        let questions = vec![
            sample("keiho", 1985, "s60", 2, "b"),
            sample("keiho", 1990, "h02", 1, "c"),
            sample("keiho", 1985, "s60", 1, "a"),
        ];
        let index = render_subject_index("keiho", &questions);
        assert_eq!(
            index,
            "# 刑法\n\
             \n\
             | 年度 | 問題 |\n\
             | --- | --- |\n\
             | 平成2年度（1990年度） | [第1問](1990_h02_q1.md) |\n\
             | 昭和60年度（1985年度） | [第1問](1985_s60_q1.md) / [第2問](1985_s60_q2.md) |\n"
        );
    }

    #[test]
    fn test_empty_subject_has_header_only() {
        let index = render_subject_index("gyosei", &[]);
        assert_eq!(index, "# gyosei\n\n| 年度 | 問題 |\n| --- | --- |\n");
    }

    #[test]
    fn test_write_creates_index_file() {
        let dir = tempfile::tempdir().unwrap();
        let questions = vec![sample("kenpo", 1985, "s60", 1, "a")];
        write_subject_index(dir.path(), "kenpo", &questions).unwrap();
        let written = std::fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(written.starts_with("# 憲法\n"));
    }
}
