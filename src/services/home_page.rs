//! 首页写入服务 - 业务能力层
//!
//! 生成全部科目的题目总表。筛选、排序、高亮都由页面内嵌的脚本在浏览器端完成，
//! 这里只负责把每一行需要的数据写进 `data-*` 属性。

use crate::error::{AppError, AppResult};
use crate::models::{display_order_key, Question};
use crate::utils::{html_escape, truncate_text};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// 概要列显示的最大字符数
pub const SNIPPET_LEN: usize = 70;

/// 问题筛选下拉框中的题号
const QNUM_OPTIONS: [u32; 4] = [1, 2, 3, 4];

/// 样式与筛选脚本
const HOME_ASSETS: &str = include_str!("assets/home_page.html");

/// 行内检索键：科目、年度、题号、年份、正文、标签，统一小写
pub fn search_key(question: &Question) -> String {
    [
        question.subject_label.clone(),
        question.era_label(),
        question.qnum_label(),
        question.year.to_string(),
        question.flat_text(),
        question.tags.join(" "),
    ]
    .join(" ")
    .to_lowercase()
}

/// 概要文本：前 70 个字符，超出时追加 `…`
pub fn snippet(question: &Question) -> String {
    truncate_text(&question.flat_text(), SNIPPET_LEN, "…")
}

/// 首页表格的排序：科目固定顺序 → 年度降序 → 题号升序
pub fn sort_for_home(questions: &[Question]) -> Vec<&Question> {
    let mut sorted: Vec<&Question> = questions.iter().collect();
    sorted.sort_by(|a, b| {
        display_order_key(&a.subject_label)
            .cmp(&display_order_key(&b.subject_label))
            .then(b.year.cmp(&a.year))
            .then(a.qnum.cmp(&b.qnum))
    });
    sorted
}

fn render_filters(questions: &[Question]) -> Vec<String> {
    let subjects: BTreeSet<&str> = questions.iter().map(|q| q.subject_label.as_str()).collect();
    let mut subjects: Vec<&str> = subjects.into_iter().collect();
    subjects.sort_by(|a, b| display_order_key(a).cmp(&display_order_key(b)));

    // 每个年份取第一次出现时的元号标签
    let mut year_labels: BTreeMap<u32, String> = BTreeMap::new();
    for q in questions {
        year_labels.entry(q.year).or_insert_with(|| q.era_label());
    }

    let subject_options: String = subjects
        .iter()
        .map(|s| {
            let s = html_escape(s);
            format!(r#"<option value="{s}">{s}</option>"#)
        })
        .collect();
    let year_options: String = year_labels
        .iter()
        .rev()
        .map(|(year, label)| format!(r#"<option value="{year}">{label}（{year}年度）</option>"#))
        .collect();
    let qnum_options: String = QNUM_OPTIONS
        .iter()
        .map(|n| format!(r#"<option value="{n}">第{n}問</option>"#))
        .collect();

    vec![
        r#"<div class="filters">"#.to_string(),
        format!(
            r#"  <label>科目 <select id="filter-subject" autocomplete="off"><option value="" selected>すべて</option>{}</select></label>"#,
            subject_options
        ),
        format!(
            r#"  <label>年度 <select id="filter-year" autocomplete="off"><option value="">すべて</option>{}</select></label>"#,
            year_options
        ),
        format!(
            r#"  <label>問題 <select id="filter-q" autocomplete="off"><option value="">すべて</option>{}</select></label>"#,
            qnum_options
        ),
        r#"  <label>検索 <input id="filter-text" autocomplete="off" type="search" placeholder="例: 共同正犯 共謀 240条" aria-label="キーワードで絞り込み" class="md-input"></label>"#.to_string(),
        r#"  <button id="clear-filters" type="button" class="clear-btn">条件をクリア</button>"#.to_string(),
        "</div>".to_string(),
        r#"<div id="results-count" class="results-count"></div>"#.to_string(),
    ]
}

/// 渲染表格中的一行
pub fn render_row(question: &Question) -> String {
    let era = question.era_label();
    let snippet_html = html_escape(&snippet(question));
    let subject = html_escape(&question.subject_label);
    let tags_html = if question.tags.is_empty() {
        "—".to_string()
    } else {
        question
            .tags
            .iter()
            .map(|t| {
                let t = html_escape(t);
                format!(r#"<button class="tag-link" type="button" data-tag="{t}">{t}</button>"#)
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        concat!(
            r#"    <tr data-search="{search}" data-subject="{subject}" data-subject-order="{order}" "#,
            r#"data-year="{year}" data-era="{era}" data-q="{qnum}">"#,
            r#"<td>{subject}</td>"#,
            r#"<td>{year_label}</td>"#,
            r#"<td><a class="problem-link" href="./{code}/{stem}/">{qnum_label}</a></td>"#,
            r#"<td class="snippet-cell" data-snippet="{snippet}">{snippet}</td>"#,
            r#"<td class="tags-cell" data-tags="{tags_attr}">{tags_html}</td>"#,
            "</tr>"
        ),
        search = html_escape(&search_key(question)),
        subject = subject,
        order = display_order_key(&question.subject_label).0,
        year = question.year,
        era = html_escape(&era),
        qnum = question.qnum,
        year_label = html_escape(&question.year_label()),
        code = question.subject,
        stem = question.slug_stem(),
        qnum_label = question.qnum_label(),
        snippet = snippet_html,
        tags_attr = html_escape(&question.tags.join("|||")),
        tags_html = tags_html,
    )
}

/// 渲染首页
pub fn render_home(questions: &[Question]) -> String {
    let mut lines = vec![
        "# 旧司法試験 論文式試験問題".to_string(),
        String::new(),
        "科目・年度・問題番号で絞り込み、列ヘッダでソートできます。キーワードは空白区切りでAND検索です。".to_string(),
        String::new(),
    ];
    lines.extend(render_filters(questions));
    lines.extend([
        String::new(),
        r#"<table id="questions">"#.to_string(),
        "  <thead>".to_string(),
        r#"    <tr><th data-sort="subject">科目</th><th data-sort="year">年度</th><th data-sort="q">問題</th><th>概要</th><th>タグ</th></tr>"#.to_string(),
        "  </thead>".to_string(),
        "  <tbody>".to_string(),
    ]);
    lines.extend(sort_for_home(questions).into_iter().map(render_row));
    lines.extend([
        "  </tbody>".to_string(),
        "</table>".to_string(),
        String::new(),
        HOME_ASSETS.trim().to_string(),
        String::new(),
    ]);

    lines.join("\n")
}

/// 写入 `{docs_dir}/index.md`
pub fn write_home(docs_dir: &Path, questions: &[Question]) -> AppResult<()> {
    let target = docs_dir.join("index.md");
    let content = render_home(questions);
    std::fs::write(&target, content).map_err(|e| AppError::file_write_failed(&target, e))
}
