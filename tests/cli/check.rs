use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, PART_DESIGN_CS, error_filters};

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "translations/Draft_de.ts",
        r#"<TS version="2.1" language="de">
<context>
    <name>Draft</name>
    <message>
        <source>Delete %1 of %2</source>
        <translation>%2: %1 löschen</translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog, 1 entry - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_unfinished_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "Create a new body and make it active"  unfinished
      --> translations/PartDesign_cs.ts:13
       = note: in context CmdPartDesignBody

    ✘ 1 problems (0 errors, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_errors_fail_the_check() -> Result<()> {
    let test = CliTest::with_file(
        "translations/Sketcher_cs.ts",
        r#"<TS version="2.1" language="cs">
<context>
    <name>Sketcher</name>
    <message>
        <source>Constrain %1</source>
        <translation>Zavazbit</translation>
    </message>
    <message>
        <source>Close</source>
        <translation></translation>
    </message>
    <message>
        <source>Constrain %1</source>
        <translation>Zavazbit %1</translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Constrain %1"  placeholder-mismatch
      --> translations/Sketcher_cs.ts:5
       = note: ("Zavazbit") missing %1

    error: "Close"  empty-translation
      --> translations/Sketcher_cs.ts:9
       = note: in context Sketcher
       = hint: translate the entry or mark it unfinished

    error: "Constrain %1"  duplicate-entry
      --> translations/Sketcher_cs.ts:13
       = note: in context Sketcher, first defined at line 5
       = hint: run `tscat merge --apply` to fold duplicates

    ✘ 3 problems (3 errors, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;

    let mut cmd = test.check_command();
    cmd.args(["empty-translation", "duplicate-entry"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog, 3 entries - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_placeholder_check_disabled_in_config() -> Result<()> {
    let test = CliTest::with_file(
        "translations/Draft_cs.ts",
        r#"<TS language="cs"><context><name>Draft</name>
<message><source>Move %1</source><translation>Přesunout</translation></message>
</context></TS>"#,
    )?;
    test.write_file(".tscatrc.json", r#"{ "checkPlaceholders": false }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog, 1 entry - no issues found

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.check_command().arg("placeholder-mismatch"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Move %1"  placeholder-mismatch
      --> translations/Draft_cs.ts:2
      = note: ("Přesunout") missing %1

    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_malformed_catalog_is_reported() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;
    test.write_file(
        "translations/PartDesign_de.ts",
        "<TS><context><name>A</name></TS>",
    )?;

    insta::with_settings!({ filters => error_filters() }, {
        assert_cmd_snapshot!(test.check_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        warning: "Create a new body and make it active"  unfinished
          --> translations/PartDesign_cs.ts:13
           = note: in context CmdPartDesignBody

        error: "[PARSE ERROR]"  parse-error
          --> translations/PartDesign_de.ts

        ✘ 2 problems (1 error, 1 warning)

        ----- stderr -----
        warning: 1 catalog(s) could not be loaded (use -v for details)
        "#);
    });

    Ok(())
}

#[test]
fn test_self_closing_context_is_a_parse_error() -> Result<()> {
    let test = CliTest::with_file(
        "translations/PartDesign_cs.ts",
        r#"<TS version="2.1" language="cs"><context/></TS>"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "invalid catalog at byte 42: <context> without <name>"  parse-error
      --> translations/PartDesign_cs.ts

    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    warning: 1 catalog(s) could not be loaded (use -v for details)
    "#);

    Ok(())
}

#[test]
fn test_custom_catalogs_root() -> Result<()> {
    let test = CliTest::with_file("i18n/PartDesign_cs.ts", PART_DESIGN_CS)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Catalogs directory not found: ./translations
    ");

    assert_cmd_snapshot!(test.check_command().args(["--catalogs-root", "i18n"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "Create a new body and make it active"  unfinished
      --> i18n/PartDesign_cs.ts:13
       = note: in context CmdPartDesignBody

    ✘ 1 problems (0 errors, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}
