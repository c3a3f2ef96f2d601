use anyhow::Result;

use crate::{CLEAN_JA, CliTest, run};

const MESSY: &str = r#"<TS version="2.1" language="ja" sourcelanguage="en"><context><name>Workbench</name><message><location filename="../../Workbench.cpp" line="34"/><source>Drawing</source><translation>図面</translation></message></context></TS>"#;

#[test]
fn canonical_file_is_left_alone() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", CLEAN_JA)?;

    let (code, stdout, _) = run(test.fmt_command().arg("translations"))?;
    assert_eq!(code, Some(0));
    assert!(stdout.contains("already canonical"));

    Ok(())
}

#[test]
fn dry_run_lists_files_without_writing() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", MESSY)?;

    let (code, stdout, _) = run(test.fmt_command().arg("translations"))?;
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Would rewrite"));
    assert!(stdout.contains("--apply"));
    // Dry run: the file is untouched.
    assert_eq!(test.read_file("translations/Drawing_ja.ts")?, MESSY);

    Ok(())
}

#[test]
fn apply_rewrites_to_canonical_layout() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", MESSY)?;

    let (code, stdout, _) = run(test.fmt_command().args(["translations", "--apply"]))?;
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Rewrote"));
    assert_eq!(test.read_file("translations/Drawing_ja.ts")?, CLEAN_JA);

    // A second run finds nothing to do.
    let (code, stdout, _) = run(test.fmt_command().arg("translations"))?;
    assert_eq!(code, Some(0));
    assert!(stdout.contains("already canonical"));

    Ok(())
}

#[test]
fn unparseable_file_fails_fast() -> Result<()> {
    let test = CliTest::with_file("translations/broken.ts", "<TS version=\"2.1\">")?;

    let (code, _, stderr) = run(test.fmt_command().args(["translations", "--apply"]))?;
    assert_eq!(code, Some(2));
    assert!(stderr.contains("broken.ts"));

    Ok(())
}
