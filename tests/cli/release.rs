use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use tscat::translator::Translator;

use crate::{CliTest, PART_DESIGN_CS};

#[test]
fn test_release_next_to_catalogs() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;

    assert_cmd_snapshot!(test.release_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating 'translations/PartDesign_cs.json'...
        Generated 1 translation(s) (1 finished and 1 unfinished)
        Ignored 1 untranslated source text(s)

    ----- stderr -----
    ");

    let translator = Translator::from_json(&test.read_file("translations/PartDesign_cs.json")?)?;
    assert_eq!(translator.language(), Some("cs"));
    assert_eq!(
        translator.translate("CmdPartDesignBody", "Create body"),
        "Vytvořit těleso"
    );
    assert_eq!(
        translator.translate("CmdPartDesignBody", "Old label"),
        "Old label"
    );

    Ok(())
}

#[test]
fn test_release_to_out_dir() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;

    let mut cmd = test.release_command();
    cmd.args(["--out-dir", "build/i18n"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updating 'build/i18n/PartDesign_cs.json'...
        Generated 1 translation(s) (1 finished and 1 unfinished)
        Ignored 1 untranslated source text(s)

    ----- stderr -----
    ");
    assert!(test.root().join("build/i18n/PartDesign_cs.json").is_file());

    Ok(())
}
