use kyushi_docs::error::{AppError, FileError, ParseError};
use kyushi_docs::{App, Config, RunStats};
use std::collections::BTreeMap;
use std::fs;
use regex::Regex;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 测试用数据集：kyushi-ronbun/{subject}/kyushi_*.txt
struct Fixture {
    _root: TempDir,
    data_dir: PathBuf,
    docs_dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let data_dir = root.path().join("kyushi-ronbun");
        let docs_dir = root.path().join("docs");
        fs::create_dir(&data_dir).unwrap();
        Self {
            _root: root,
            data_dir,
            docs_dir,
        }
    }

    fn add(&self, subject: &str, name: &str, text: &str) -> &Self {
        let dir = self.data_dir.join(subject);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), text).unwrap();
        self
    }

    fn config(&self) -> Config {
        Config {
            data_dir: self.data_dir.clone(),
            docs_dir: self.docs_dir.clone(),
            verbose_logging: false,
        }
    }

    fn run(&self) -> anyhow::Result<RunStats> {
        App::initialize(self.config())?.run()
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.docs_dir.join(rel)).unwrap()
    }

    fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut files = BTreeMap::new();
        collect(&self.docs_dir, &mut files);
        files
    }
}

fn collect(dir: &Path, files: &mut BTreeMap<PathBuf, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(&path, files);
        } else {
            files.insert(path.clone(), fs::read(&path).unwrap());
        }
    }
}

/// 首页中每一行的 (链接, 检索键)
fn home_rows(home: &str) -> Vec<(String, String)> {
    let re = Regex::new(r#"<tr data-search="([^"]*)"[^>]*>.*?href="([^"]+)""#).unwrap();
    re.captures_iter(home)
        .map(|c| (c[2].to_string(), c[1].replace("&amp;", "&")))
        .collect()
}

/// 与页面脚本相同的关键词筛选：空白分隔、全部包含、不区分大小写
fn rows_matching(home: &str, query: &str) -> Vec<String> {
    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    home_rows(home)
        .into_iter()
        .filter(|(_, key)| {
            let key = key.to_lowercase();
            tokens.iter().all(|t| key.contains(t.as_str()))
        })
        .map(|(href, _)| href)
        .collect()
}

fn sample_dataset() -> Fixture {
    let fixture = Fixture::new();
    fixture
        .add("kenpo", "kyushi_kenpo_1985_s60_q1.txt", "問題文\n")
        .add("kenpo", "kyushi_kenpo_1990_h02_q2.txt", "表現の自由について論ぜよ。\n")
        .add(
            "keiho",
            "kyushi_keiho_1990_h02_q1.txt",
            "甲と乙は共謀の上、\n\n丙を殴打した。甲の罪責を論ぜよ。\n",
        )
        .add("keiho", "kyushi_keiho_1990_h02_q2.txt", "窃盗罪について。\n")
        .add("keiho", "memo.txt", "not a question");
    fixture
}

#[test]
fn test_generates_expected_layout() {
    let fixture = sample_dataset();
    let stats = fixture.run().unwrap();

    assert_eq!(
        stats,
        RunStats {
            subjects: 2,
            questions: 4,
            pages_with_tags: 0,
            pages_with_memo: 0,
        }
    );

    let page = fixture.read("kenpo/1985_s60_q1.md");
    assert!(page.contains("昭和60年度"));
    assert!(page.contains("憲法"));
    assert!(page.contains("第1問"));
    assert!(page.contains("\n> 問題文\n"));
    assert!(page.contains("tags: []"));
    assert!(page.ends_with("## メモ\n\n_ここにメモを書く_\n"));

    let blank_line_page = fixture.read("keiho/1990_h02_q1.md");
    assert!(blank_line_page.contains("> 甲と乙は共謀の上、\n>\n> 丙を殴打した。甲の罪責を論ぜよ。\n"));

    let kenpo_index = fixture.read("kenpo/index.md");
    let h02 = kenpo_index.find("平成2年度（1990年度）").unwrap();
    let s60 = kenpo_index.find("昭和60年度（1985年度）").unwrap();
    assert!(h02 < s60);

    let home = fixture.read("index.md");
    let kenpo_row = home.find(r#"href="./kenpo/1990_h02_q2/""#).unwrap();
    let keiho_row = home.find(r#"href="./keiho/1990_h02_q1/""#).unwrap();
    assert!(kenpo_row < keiho_row, "憲法 rows come before 刑法 rows");
    assert!(!home.contains("memo.txt"));
}

#[test]
fn test_second_run_is_byte_identical() {
    let fixture = sample_dataset();
    fixture.run().unwrap();
    let first = fixture.snapshot();

    fixture.run().unwrap();
    let second = fixture.snapshot();

    assert_eq!(first.len(), 7);
    assert_eq!(first, second);
}

#[test]
fn test_user_tags_and_memo_survive_regeneration() {
    let fixture = sample_dataset();
    fixture.run().unwrap();

    let target = fixture.docs_dir.join("keiho/1990_h02_q1.md");
    let edited = fixture
        .read("keiho/1990_h02_q1.md")
        .replace("tags: []", "tags:\n  - 共同正犯\n  - 共謀")
        .replace("_ここにメモを書く_", "共謀共同正犯の成否。\n\n- 練馬事件");
    fs::write(&target, &edited).unwrap();

    let stats = fixture.run().unwrap();
    assert_eq!(stats.pages_with_tags, 1);
    assert_eq!(stats.pages_with_memo, 1);

    let page = fixture.read("keiho/1990_h02_q1.md");
    assert_eq!(page, edited);

    let home = fixture.read("index.md");
    assert!(home.contains(r#"data-tags="共同正犯|||共謀""#));
    assert!(home.contains(r#"<button class="tag-link" type="button" data-tag="共同正犯">共同正犯</button>"#));
    // 检索键同时包含两个关键词，AND 检索命中该行
    let row = home
        .lines()
        .find(|l| l.contains(r#"href="./keiho/1990_h02_q1/""#))
        .unwrap();
    assert!(row.contains("共同正犯") && row.contains("共謀"));

    // 其余行至多含其中一个关键词
    assert_eq!(rows_matching(&home, "共同正犯 共謀"), vec!["./keiho/1990_h02_q1/"]);
}

#[test]
fn test_keyword_filter_requires_every_token() {
    let fixture = sample_dataset();
    fixture.add(
        "keiho",
        "kyushi_keiho_1985_s60_q1.txt",
        "甲は乙と共謀して窃盗を企てた。\n",
    );
    fixture.run().unwrap();

    let home = fixture.read("index.md");
    assert_eq!(home_rows(&home).len(), 5);

    let only_kyobo = home_rows(&home)
        .into_iter()
        .find(|(href, _)| href == "./keiho/1985_s60_q1/")
        .map(|(_, key)| key)
        .unwrap();
    assert!(only_kyobo.contains("共謀"));
    assert!(!only_kyobo.contains("共同正犯"));
    assert!(rows_matching(&home, "共同正犯 共謀").is_empty());

    // 两行都含「共謀」，再加「殴打」只剩一行
    let both = rows_matching(&home, "共謀");
    assert_eq!(both, vec!["./keiho/1990_h02_q1/", "./keiho/1985_s60_q1/"]);
    assert_eq!(rows_matching(&home, "共謀 殴打"), vec!["./keiho/1990_h02_q1/"]);
    assert!(rows_matching(&home, "共謀 表現").is_empty());
    assert_eq!(rows_matching(&home, "KENPO").len(), 0);
    assert_eq!(rows_matching(&home, "憲法 1990").len(), 1);
}

#[test]
fn test_rows_carry_sort_keys() {
    let fixture = sample_dataset();
    fixture.run().unwrap();
    let home = fixture.read("index.md");

    for key in ["subject", "year", "q"] {
        assert!(home.contains(&format!(r#"<th data-sort="{key}">"#)));
    }
    let re = Regex::new(r#"data-subject-order="(\d+)" data-year="(\d{4})" data-era="[^"]+" data-q="(\d+)""#).unwrap();
    let keys: Vec<(u32, u32, u32)> = re
        .captures_iter(&home)
        .map(|c| (c[1].parse().unwrap(), c[2].parse().unwrap(), c[3].parse().unwrap()))
        .collect();
    assert_eq!(keys, vec![(0, 1990, 2), (0, 1985, 1), (3, 1990, 1), (3, 1990, 2)]);
}

#[test]
fn test_missing_dataset_is_fatal_before_output() {
    let root = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: root.path().join("kyushi-ronbun"),
        docs_dir: root.path().join("docs"),
        verbose_logging: false,
    };

    let err = App::initialize(config).err().expect("missing dataset must fail");
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::File(FileError::DatasetNotFound { .. }))
    ));
    assert!(!root.path().join("docs").exists());
}

#[test]
fn test_malformed_filename_aborts_without_pages() {
    let fixture = sample_dataset();
    fixture.add("minpo", "kyushi_minpo_1985_s60.txt", "no question number");

    let err = fixture.run().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::Parse(ParseError::UnexpectedFilename { .. }))
    ));
    assert!(!fixture.docs_dir.join("kenpo/1985_s60_q1.md").exists());
    assert!(!fixture.docs_dir.join("index.md").exists());
}

#[test]
fn test_unknown_subject_passes_through() {
    let fixture = Fixture::new();
    fixture
        .add("gyosei", "kyushi_gyosei_1985_s60_q1.txt", "行政法の問題")
        .add("shoho", "kyushi_shoho_1985_s60_q1.txt", "商法の問題");
    fixture.run().unwrap();

    assert!(fixture.read("gyosei/index.md").starts_with("# gyosei\n"));
    let home = fixture.read("index.md");
    let shoho = home.find(r#"data-subject="商法""#).unwrap();
    let gyosei = home.find(r#"data-subject="gyosei""#).unwrap();
    assert!(shoho < gyosei);
}

#[test]
fn test_crlf_source_leaves_no_carriage_returns() {
    let fixture = Fixture::new();
    fixture.add(
        "keiho",
        "kyushi_keiho_1990_h02_q1.txt",
        "甲の罪責\r\n\r\n乙の罪責\r\n",
    );
    fixture.run().unwrap();

    let page = fixture.read("keiho/1990_h02_q1.md");
    assert!(page.contains("> 甲の罪責\n>\n> 乙の罪責\n"));

    let home = fixture.read("index.md");
    let row = home
        .lines()
        .find(|l| l.contains(r#"href="./keiho/1990_h02_q1/""#))
        .unwrap();
    assert!(!row.contains('\r'));
    assert!(row.contains(r#"data-snippet="甲の罪責  乙の罪責""#));
}
