//! End-to-end extraction tests over temporary files

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pubtext_core::{Config, ExtractError, PmidRange, Summary, run};

const BASELINE_XML: &str = r#"<?xml version="1.0"?>
<MedlineCitationSet>
  <MedlineCitation>
    <PMID>100</PMID>
    <Article>
      <ArticleTitle>First title.</ArticleTitle>
      <Abstract>
        <AbstractText>Single paragraph abstract.</AbstractText>
      </Abstract>
    </Article>
  </MedlineCitation>
  <MedlineCitation>
    <PMID>150</PMID>
    <Article>
      <ArticleTitle>Second title.</ArticleTitle>
      <Abstract>
        <AbstractText Label="BACKGROUND">bg text</AbstractText>
        <AbstractText Label="METHODS">methods text</AbstractText>
      </Abstract>
    </Article>
  </MedlineCitation>
  <MedlineCitation>
    <PMID>200</PMID>
    <Article>
      <ArticleTitle>Third title.</ArticleTitle>
    </Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

fn write_input(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, xml).unwrap();
    path
}

fn config_for(dir: &Path) -> Config {
    Config {
        output_dir: dir.join("texts"),
        ..Default::default()
    }
}

fn run_one(config: &Config, input: &Path) -> Result<Summary, ExtractError> {
    run(config, &[input])
}

#[test]
fn extracts_all_records() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0001.xml", BASELINE_XML);
    let config = config_for(dir.path());

    let summary = run_one(&config, &input).unwrap();
    assert_eq!(summary.output, 3);
    assert_eq!(summary.skipped, 0);

    let package_dir = config.output_dir.join("medline12n0001");
    assert_eq!(
        std::fs::read_to_string(package_dir.join("100.txt")).unwrap(),
        "First title.\nSingle paragraph abstract.\n"
    );
    assert_eq!(
        std::fs::read_to_string(package_dir.join("150.txt")).unwrap(),
        "Second title.\nBACKGROUND:\nbg text\nMETHODS:\nmethods text\n"
    );
    // No abstract: title line only
    assert_eq!(
        std::fs::read_to_string(package_dir.join("200.txt")).unwrap(),
        "Third title.\n"
    );
}

#[test]
fn extracts_from_gzip_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("medline12n0002.xml.gz");
    let file = std::fs::File::create(&input).unwrap();
    let mut enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    enc.write_all(BASELINE_XML.as_bytes()).unwrap();
    enc.finish().unwrap();

    let config = config_for(dir.path());
    let summary = run_one(&config, &input).unwrap();
    assert_eq!(summary.output, 3);

    let package_dir = config.output_dir.join("medline12n0002");
    assert!(package_dir.join("100.txt").exists());
    assert!(package_dir.join("150.txt").exists());
}

#[test]
fn range_filter_bounds_are_exclusive() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0003.xml", BASELINE_XML);
    let mut config = config_for(dir.path());
    config.range = PmidRange {
        greater_than: Some(100),
        lower_than: Some(200),
    };

    let summary = run_one(&config, &input).unwrap();
    assert_eq!(summary.output, 1);
    assert_eq!(summary.skipped, 2);

    let package_dir = config.output_dir.join("medline12n0003");
    assert!(!package_dir.join("100.txt").exists());
    assert!(package_dir.join("150.txt").exists());
    assert!(!package_dir.join("200.txt").exists());
}

#[test]
fn title_and_multiline_abstract_roundtrip() {
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>1</PMID>
    <Article>
      <ArticleTitle>T</ArticleTitle>
      <Abstract>
        <AbstractText Label="A">a body</AbstractText>
        <AbstractText Label="B">b body</AbstractText>
      </Abstract>
    </Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0004.xml", xml);
    let config = config_for(dir.path());
    run_one(&config, &input).unwrap();

    let content =
        std::fs::read_to_string(config.output_dir.join("medline12n0004").join("1.txt")).unwrap();
    assert_eq!(content.lines().next().unwrap(), "T");
    assert_eq!(content, "T\nA:\na body\nB:\nb body\n");
}

#[test]
fn single_line_abstract_mode() {
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>1</PMID>
    <Article>
      <ArticleTitle>T</ArticleTitle>
      <Abstract>
        <AbstractText Label="A">a body</AbstractText>
        <AbstractText Label="B">b body</AbstractText>
      </Abstract>
    </Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0005.xml", xml);
    let mut config = config_for(dir.path());
    config.single_line_abstract = true;
    run_one(&config, &input).unwrap();

    let content =
        std::fs::read_to_string(config.output_dir.join("medline12n0005").join("1.txt")).unwrap();
    assert_eq!(content, "T\nA: a body B: b body\n");
}

#[test]
fn inline_markup_keeps_surrounding_whitespace() {
    let xml = "<MedlineCitationSet>\
<MedlineCitation>\
<PMID>1</PMID>\
<Article>\
<ArticleTitle>Effects of <i>E. coli</i> on mice</ArticleTitle>\
<Abstract><AbstractText> leading and trailing kept </AbstractText></Abstract>\
</Article>\
</MedlineCitation>\
</MedlineCitationSet>";

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0015.xml", xml);
    let config = config_for(dir.path());
    run_one(&config, &input).unwrap();

    let content =
        std::fs::read_to_string(config.output_dir.join("medline12n0015").join("1.txt")).unwrap();
    assert_eq!(
        content,
        "Effects of E. coli on mice\n leading and trailing kept \n"
    );
}

#[test]
fn other_abstract_used_when_article_has_none() {
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>1</PMID>
    <Article>
      <ArticleTitle>T</ArticleTitle>
    </Article>
    <OtherAbstract Type="NASA">
      <AbstractText>from other abstract</AbstractText>
    </OtherAbstract>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0006.xml", xml);
    let config = config_for(dir.path());
    run_one(&config, &input).unwrap();

    let content =
        std::fs::read_to_string(config.output_dir.join("medline12n0006").join("1.txt")).unwrap();
    assert_eq!(content, "T\nfrom other abstract\n");
}

#[test]
fn two_articles_abort_but_earlier_output_remains() {
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>1</PMID>
    <Article>
      <ArticleTitle>Fine record.</ArticleTitle>
    </Article>
  </MedlineCitation>
  <MedlineCitation>
    <PMID>2</PMID>
    <Article><ArticleTitle>A</ArticleTitle></Article>
    <Article><ArticleTitle>B</ArticleTitle></Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0007.xml", xml);
    let config = config_for(dir.path());

    let err = run_one(&config, &input).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::ArticleCardinality { ref pmid, count: 2 } if pmid == "2"
    ));

    // No rollback: the record before the bad one is still on disk
    let package_dir = config.output_dir.join("medline12n0007");
    assert!(package_dir.join("1.txt").exists());
    assert!(!package_dir.join("2.txt").exists());
}

#[test]
fn non_numeric_pmid_aborts() {
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>12x45</PMID>
    <Article><ArticleTitle>T</ArticleTitle></Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0008.xml", xml);
    let config = config_for(dir.path());

    let err = run_one(&config, &input).unwrap_err();
    assert!(matches!(err, ExtractError::BadPmid { .. }));
}

#[test]
fn missing_title_aborts() {
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>1</PMID>
    <Article>
      <Language>eng</Language>
    </Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0009.xml", xml);
    let config = config_for(dir.path());

    let err = run_one(&config, &input).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::TitleCardinality { count: 0, .. }
    ));
}

#[test]
fn abstract_without_segments_aborts() {
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>1</PMID>
    <Article>
      <ArticleTitle>T</ArticleTitle>
      <Abstract>
        <CopyrightInformation>(c) nobody</CopyrightInformation>
      </Abstract>
    </Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0010.xml", xml);
    let config = config_for(dir.path());

    let err = run_one(&config, &input).unwrap_err();
    assert!(matches!(err, ExtractError::EmptyAbstract { .. }));
}

#[test]
fn preexisting_package_dir_aborts_before_parsing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0011.xml", "not even xml");
    let config = config_for(dir.path());
    std::fs::create_dir_all(config.output_dir.join("medline12n0011")).unwrap();

    let err = run_one(&config, &input).unwrap_err();
    assert!(matches!(err, ExtractError::OutputDirExists { .. }));
    assert!(!err.is_invalid_input());
}

#[test]
fn bad_filename_aborts() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "random-name.xml", BASELINE_XML);
    let config = config_for(dir.path());

    let err = run_one(&config, &input).unwrap_err();
    assert!(matches!(err, ExtractError::BadFilename { .. }));
    assert!(!config.output_dir.exists());
}

#[test]
fn filter_skips_before_article_validation() {
    // The second citation is malformed (two Articles) but filtered out by
    // PMID, so the run must succeed.
    let xml = r#"<MedlineCitationSet>
  <MedlineCitation>
    <PMID>150</PMID>
    <Article><ArticleTitle>Kept.</ArticleTitle></Article>
  </MedlineCitation>
  <MedlineCitation>
    <PMID>50</PMID>
    <Article><ArticleTitle>A</ArticleTitle></Article>
    <Article><ArticleTitle>B</ArticleTitle></Article>
  </MedlineCitation>
</MedlineCitationSet>"#;

    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "medline12n0012.xml", xml);
    let mut config = config_for(dir.path());
    config.range = PmidRange {
        greater_than: Some(100),
        lower_than: None,
    };

    let summary = run_one(&config, &input).unwrap();
    assert_eq!(summary.output, 1);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn counters_accumulate_across_files() {
    let dir = TempDir::new().unwrap();
    let first = write_input(dir.path(), "medline12n0013.xml", BASELINE_XML);
    let second = write_input(dir.path(), "medline12n0014.xml", BASELINE_XML);
    let config = config_for(dir.path());

    let summary = run(&config, &[first, second]).unwrap();
    assert_eq!(summary.output, 6);
    assert!(config.output_dir.join("medline12n0013").exists());
    assert!(config.output_dir.join("medline12n0014").exists());
}
