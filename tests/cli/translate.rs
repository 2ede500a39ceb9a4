use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, PART_DESIGN_CS, error_filters};

const DRAFT_PL: &str = r#"<TS version="2.1" language="pl">
<context>
    <name>Draft</name>
    <message numerus="yes">
        <source>%n object(s) selected</source>
        <translation>
            <numerusform>Zaznaczono %n obiekt</numerusform>
            <numerusform>Zaznaczono %n obiekty</numerusform>
            <numerusform>Zaznaczono %n obiektów</numerusform>
        </translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_translate_final_and_fallback() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;
    let catalog = "translations/PartDesign_cs.ts";

    assert_cmd_snapshot!(
        test.translate_command().args([catalog, "CmdPartDesignBody", "Create body"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Vytvořit těleso

    ----- stderr -----
    ");

    assert_cmd_snapshot!(
        test.translate_command().args([
            catalog,
            "CmdPartDesignBody",
            "Create a new body and make it active",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Create a new body and make it active

    ----- stderr -----
    ");

    assert_cmd_snapshot!(
        test.translate_command().args([catalog, "CmdPartDesignBody", "Old label"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Old label

    ----- stderr -----
    ");

    assert_cmd_snapshot!(
        test.translate_command().args([catalog, "OtherContext", "Create body"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Create body

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_plural_forms() -> Result<()> {
    let test = CliTest::with_file("translations/Draft_pl.ts", DRAFT_PL)?;
    let catalog = "translations/Draft_pl.ts";
    let source = "%n object(s) selected";

    assert_cmd_snapshot!(
        test.translate_command().args([catalog, "Draft", source, "-n", "1"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Zaznaczono 1 obiekt

    ----- stderr -----
    ");

    assert_cmd_snapshot!(
        test.translate_command().args([catalog, "Draft", source, "-n", "3"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Zaznaczono 3 obiekty

    ----- stderr -----
    ");

    assert_cmd_snapshot!(
        test.translate_command().args([catalog, "Draft", source, "-n", "12"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Zaznaczono 12 obiektów

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/Draft_pl.ts", "<TS><context></TS>")?;

    insta::with_settings!({ filters => error_filters() }, {
        assert_cmd_snapshot!(
            test.translate_command().args(["translations/Draft_pl.ts", "Draft", "Move"]),
            @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to load translations/Draft_pl.ts: [PARSE ERROR]
        ");
    });

    Ok(())
}
