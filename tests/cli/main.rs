use std::{fs, path::PathBuf, process::Command};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod fmt;
mod query;
mod stats;

const BIN_NAME: &str = "lingot";

/// A slice of a real Qt Linguist resource (a CAD drawing module's
/// Japanese translations), covering the interesting cases: mnemonics,
/// repeated location tags, an unfinished entry, placeholder messages
/// with a trailing newline, and multi-line text.
pub const DRAWING_JA: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ja" sourcelanguage="en">
  <context>
    <name>CmdDrawingAnnotation</name>
    <message>
      <location filename="../../Command.cpp" line="510"/>
      <source>Drawing</source>
      <translation>図面</translation>
    </message>
    <message>
      <location filename="../../Command.cpp" line="511"/>
      <source>&amp;Annotation</source>
      <translation>注釈(&amp;A)</translation>
    </message>
    <message>
      <location filename="../../Command.cpp" line="512"/>
      <location filename="../../Command.cpp" line="514"/>
      <source>Inserts an Annotation view in the active drawing</source>
      <translation>アクティブな図面に注釈表示を挿入</translation>
    </message>
  </context>
  <context>
    <name>CmdDrawingNewA3Landscape</name>
    <message>
      <location filename="../../Command.cpp" line="275"/>
      <source>Drawing</source>
      <translation>図面</translation>
    </message>
    <message>
      <location filename="../../Command.cpp" line="276"/>
      <location filename="../../Command.cpp" line="277"/>
      <source>Insert new A3 landscape drawing</source>
      <translation type="unfinished">Insert new A3 landscape drawing</translation>
    </message>
  </context>
  <context>
    <name>Drawing_NewPage</name>
    <message>
      <location filename="../../Command.cpp" line="239"/>
      <source>%1%2 %3</source>
      <translation>%1%2 %3
</translation>
    </message>
    <message>
      <location filename="../../Command.cpp" line="242"/>
      <source>Insert new %1%2 %3 drawing</source>
      <translation>新しい %1 %2 %3 の図面を挿入</translation>
    </message>
  </context>
  <context>
    <name>DrawingGui::DrawingView</name>
    <message>
      <location filename="../../DrawingView.cpp" line="609"/>
      <location filename="../../DrawingView.cpp" line="620"/>
      <source>The printer uses a different paper size than the drawing.
Do you want to continue?</source>
      <translation>プリンターでは、図面とは異なる用紙サイズを使用します。
続行しますか？</translation>
    </message>
  </context>
  <context>
    <name>Workbench</name>
    <message>
      <location filename="../../Workbench.cpp" line="34"/>
      <source>Drawing</source>
      <translation>図面</translation>
    </message>
  </context>
</TS>
"#;

/// A fully translated file that passes every check.
pub const CLEAN_JA: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ja" sourcelanguage="en">
  <context>
    <name>Workbench</name>
    <message>
      <location filename="../../Workbench.cpp" line="34"/>
      <source>Drawing</source>
      <translation>図面</translation>
    </message>
  </context>
</TS>
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn query_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("query");
        cmd
    }

    pub fn fmt_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fmt");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command and capture status code, stdout and stderr.
pub fn run(cmd: &mut Command) -> Result<(Option<i32>, String, String)> {
    let output = cmd.output().context("Failed to run lingot binary")?;
    Ok((
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    ))
}
