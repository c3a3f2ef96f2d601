use anyhow::Result;

use crate::{CliTest, DRAWING_JA, run};

#[test]
fn finished_entry_prints_translation() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", DRAWING_JA)?;

    let (code, stdout, _) = run(test
        .query_command()
        .args(["Workbench", "Drawing", "translations"]))?;
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "図面\n");

    Ok(())
}

#[test]
fn unfinished_entry_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", DRAWING_JA)?;

    let (code, stdout, _) = run(test.query_command().args([
        "CmdDrawingNewA3Landscape",
        "Insert new A3 landscape drawing",
        "translations",
    ]))?;
    assert_eq!(code, Some(1), "fallback must be signalled via exit code");
    assert_eq!(stdout, "Insert new A3 landscape drawing\n");

    Ok(())
}

#[test]
fn unknown_key_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", DRAWING_JA)?;

    let (code, stdout, _) = run(test
        .query_command()
        .args(["NoSuchContext", "xyz", "translations"]))?;
    assert_eq!(code, Some(1));
    assert_eq!(stdout, "xyz\n");

    Ok(())
}

#[test]
fn trailing_newline_is_preserved_in_output() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", DRAWING_JA)?;

    let (code, stdout, _) = run(test
        .query_command()
        .args(["Drawing_NewPage", "%1%2 %3", "translations"]))?;
    assert_eq!(code, Some(0));
    // The stored translation ends in a newline; println adds one more.
    assert_eq!(stdout, "%1%2 %3\n\n");

    Ok(())
}

#[test]
fn same_source_resolves_per_context() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", DRAWING_JA)?;

    // "Drawing" appears in several contexts; each resolves on its own.
    for context in ["Workbench", "CmdDrawingAnnotation", "CmdDrawingNewA3Landscape"] {
        let (code, stdout, _) = run(test
            .query_command()
            .args([context, "Drawing", "translations"]))?;
        assert_eq!(code, Some(0));
        assert_eq!(stdout, "図面\n");
    }

    Ok(())
}

#[test]
fn verbose_reports_the_matching_file() -> Result<()> {
    let test = CliTest::with_file("translations/Drawing_ja.ts", DRAWING_JA)?;

    let (code, _, stderr) = run(test
        .query_command()
        .args(["Workbench", "Drawing", "translations", "--verbose"]))?;
    assert_eq!(code, Some(0));
    assert!(stderr.contains("Found in"));

    Ok(())
}
