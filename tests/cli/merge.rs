use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use tscat::catalog::{Catalog, TranslationStatus};

use crate::{CliTest, PART_DESIGN_CS, error_filters};

const TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1">
<context>
    <name>CmdPartDesignBody</name>
    <message>
        <location filename="../../Command.cpp" line="+120"/>
        <source>Create body</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location line="+10"/>
        <source>Create a new body and make it active</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location line="+30"/>
        <source>Create pad</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;
    test.write_file("templates/PartDesign.ts", TEMPLATE)?;
    Ok(test)
}

#[test]
fn test_merge_dry_run_leaves_catalogs_untouched() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.merge_command();
    cmd.args(["--template", "templates/PartDesign.ts"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    translations/PartDesign_cs.ts: 2 kept, 1 added, 0 obsoleted, 0 revived, 0 duplicate(s) folded
    Would update 1 catalog(s).
    Run with --apply to write these changes.

    ----- stderr -----
    ");
    assert_eq!(test.read_file("translations/PartDesign_cs.ts")?, PART_DESIGN_CS);

    Ok(())
}

#[test]
fn test_merge_apply_updates_catalogs() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.merge_command();
    cmd.args(["--template", "templates/PartDesign.ts", "--apply"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    translations/PartDesign_cs.ts: 2 kept, 1 added, 0 obsoleted, 0 revived, 0 duplicate(s) folded
    Updated 1 catalog(s).

    ----- stderr -----
    ");

    let merged = Catalog::load(&test.root().join("translations/PartDesign_cs.ts"))?;
    assert_eq!(merged.language.as_deref(), Some("cs"));
    assert_eq!(merged.source_language.as_deref(), Some("en"));
    let body = merged.find("CmdPartDesignBody", "Create body").unwrap();
    assert_eq!(body.translation, "Vytvořit těleso");
    assert_eq!(body.status, TranslationStatus::Final);
    let pad = merged.find("CmdPartDesignBody", "Create pad").unwrap();
    assert_eq!(pad.status, TranslationStatus::Unfinished);
    let old = merged.find("CmdPartDesignBody", "Old label").unwrap();
    assert_eq!(old.status, TranslationStatus::Obsolete);
    assert!(merged.duplicates().is_empty());

    // A second merge has nothing left to do.
    let mut cmd = test.merge_command();
    cmd.args(["--template", "templates/PartDesign.ts", "--apply"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ All catalogs are up to date

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_merge_uses_configured_source_language() -> Result<()> {
    let test = setup()?;
    test.write_file(".tscatrc.json", r#"{ "sourceLanguage": "en_GB" }"#)?;

    let mut cmd = test.merge_command();
    cmd.args(["--template", "templates/PartDesign.ts", "--apply"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    translations/PartDesign_cs.ts: 2 kept, 1 added, 0 obsoleted, 0 revived, 0 duplicate(s) folded
    Updated 1 catalog(s).

    ----- stderr -----
    ");

    let merged = Catalog::load(&test.root().join("translations/PartDesign_cs.ts"))?;
    assert_eq!(merged.source_language.as_deref(), Some("en_GB"));

    Ok(())
}

#[test]
fn test_merge_plural_change_keeps_translation() -> Result<()> {
    let test = CliTest::with_file(
        "translations/Draft_cs.ts",
        r#"<TS version="2.1" language="cs" sourcelanguage="en">
<context>
    <name>Draft</name>
    <message>
        <source>%n object(s) selected</source>
        <translation>Vybráno objektů: %n</translation>
    </message>
</context>
</TS>
"#,
    )?;
    test.write_file(
        "templates/Draft.ts",
        r#"<TS version="2.1">
<context>
    <name>Draft</name>
    <message numerus="yes">
        <source>%n object(s) selected</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#,
    )?;

    let mut cmd = test.merge_command();
    cmd.args(["--template", "templates/Draft.ts", "--apply"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    translations/Draft_cs.ts: 1 kept, 0 added, 0 obsoleted, 0 revived, 0 duplicate(s) folded
    Updated 1 catalog(s).

    ----- stderr -----
    ");

    let merged = Catalog::load(&test.root().join("translations/Draft_cs.ts"))?;
    let entry = merged.find("Draft", "%n object(s) selected").unwrap();
    assert!(entry.numerus);
    assert_eq!(entry.status, TranslationStatus::Unfinished);
    assert_eq!(
        entry.numerus_forms,
        vec![
            "Vybráno objektů: %n".to_string(),
            String::new(),
            String::new()
        ]
    );

    Ok(())
}

#[test]
fn test_template_inside_catalogs_root_is_skipped() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign.ts", TEMPLATE)?;

    let mut cmd = test.merge_command();
    cmd.args(["--template", "translations/PartDesign.ts"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ All catalogs are up to date

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_template_is_an_error() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.merge_command();
    cmd.args(["--template", "templates/Missing.ts"]);
    insta::with_settings!({ filters => error_filters() }, {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to load template templates/Missing.ts: [NOT FOUND]
        ");
    });

    Ok(())
}
