use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, PART_DESIGN_CS};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;
    test.write_file(
        "translations/PartDesign_de.ts",
        r#"<TS version="2.1" language="de"><context><name>CmdPartDesignBody</name>
<message><source>Create body</source><translation>Körper erstellen</translation></message>
</context></TS>"#,
    )?;

    assert_cmd_snapshot!(test.stats_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Catalog                        Lang  Finished  Unfinished  Obsolete    Done
    translations/PartDesign_cs.ts  cs           1           1         1   50.0%
    translations/PartDesign_de.ts  de           1           0         0  100.0%
    Total                                       2           1         1   66.7%

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_stats_ignores_configured_paths() -> Result<()> {
    let test = CliTest::with_file("translations/PartDesign_cs.ts", PART_DESIGN_CS)?;
    test.write_file("translations/vendor/Qt_cs.ts", PART_DESIGN_CS)?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["vendor/**"] }"#)?;

    assert_cmd_snapshot!(test.stats_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Catalog                        Lang  Finished  Unfinished  Obsolete   Done
    translations/PartDesign_cs.ts  cs           1           1         1  50.0%
    Total                                       1           1         1  50.0%

    ----- stderr -----
    ");

    Ok(())
}
