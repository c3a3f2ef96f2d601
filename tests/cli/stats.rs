use anyhow::Result;

use crate::{CLEAN_JA, CliTest, DRAWING_JA, run};

#[test]
fn stats_lists_contexts_with_counts() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", DRAWING_JA)?;

    let (code, stdout, _) = run(test.stats_command().arg("translations"))?;
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Drawing_ja.ts"));
    assert!(stdout.contains("Workbench"));
    assert!(stdout.contains("CmdDrawingNewA3Landscape"));
    // 8 of 9 entries finished, one unfinished.
    assert!(stdout.contains("88.9%"));

    Ok(())
}

#[test]
fn fully_translated_file_is_100_percent() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", CLEAN_JA)?;

    let (code, stdout, _) = run(test.stats_command().arg("translations"))?;
    assert_eq!(code, Some(0));
    assert!(stdout.contains("100.0%"));

    Ok(())
}

#[test]
fn vanished_entries_are_counted_but_not_in_percent() -> Result<()> {
    let test = CliTest::with_file(
        "translations/v.ts",
        r#"<TS version="2.1" language="ja">
  <context>
    <name>C</name>
    <message>
      <source>a</source>
      <translation>A</translation>
    </message>
    <message>
      <source>b</source>
      <translation type="vanished">B</translation>
    </message>
  </context>
</TS>
"#,
    )?;

    let (code, stdout, _) = run(test.stats_command().arg("translations"))?;
    assert_eq!(code, Some(0));
    // The vanished entry shows in its column without dragging down
    // the completion percentage.
    assert!(stdout.contains("100.0%"));
    assert!(stdout.contains("vanished"));

    Ok(())
}

#[test]
fn unparseable_file_fails_fast() -> Result<()> {
    let test = CliTest::with_file("translations/broken.ts", "<TS version=\"2.1\">")?;

    let (code, _, stderr) = run(test.stats_command().arg("translations"))?;
    assert_eq!(code, Some(2));
    assert!(stderr.contains("broken.ts"));

    Ok(())
}
