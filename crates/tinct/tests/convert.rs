//! Import and export behavior for the bundled `Style`.

use std::io::Write;

use tinct::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn lines() -> ExportOptions {
    ExportOptions::new().with_separator("\n")
}

// =========================================================================
// Import fixtures
// =========================================================================

struct Fixture {
    src: Style,
    input: &'static str,
    expected: Result<&'static str, &'static str>,
}

fn fixture(input: &'static str, expected: Result<&'static str, &'static str>) -> Fixture {
    Fixture {
        src: Style::new(),
        input,
        expected,
    }
}

fn fixtures() -> Vec<Fixture> {
    vec![
        fixture("", Ok("")),
        Fixture {
            src: Style::new().padding_left(11),
            input: "padding-left:22",
            expected: Ok("padding-left: 22;"),
        },
        fixture("bold: true", Ok("bold: true;")),
        fixture(
            "bold: true extra",
            Err(r#"in "bold: true extra": excess values at end: ...extra"#),
        ),
        Fixture {
            src: Style::new().foreground(Color::code("11")),
            input: "foreground: unset",
            expected: Ok(""),
        },
        fixture("align: top", Ok("")),
        fixture("align: bottom", Ok("align: 1;")),
        fixture("align: center", Ok("align: 0.5;")),
        fixture("align: left", Ok("")),
        fixture("align: right", Ok("align: 1;")),
        fixture("align: 0.25", Ok("align: 0.25;")),
        fixture(
            "align: 2",
            Err(r#"in "align: 2": position out of range [0, 1]: "2""#),
        ),
        Fixture {
            src: Style::new().foreground(Color::code("11")),
            input: "foreground: none",
            expected: Ok(""),
        },
        fixture("foreground: 11", Ok("foreground: 11;")),
        fixture("foreground: #123", Ok("foreground: #123;")),
        fixture("foreground: #123456", Ok("foreground: #123456;")),
        fixture(
            "foreground: #axxa",
            Err(r##"in "foreground: #axxa": color not recognized: "#axxa""##),
        ),
        fixture("foreground: adaptive(1,2)", Ok("foreground: adaptive(1,2);")),
        fixture(
            "foreground: adaptive(a,b)",
            Err(r#"in "foreground: adaptive(a,b)": color not recognized: "a""#),
        ),
        fixture(r#"border-style: border("","","","","","","","")"#, Ok("")),
        fixture(
            r#"border-style: border("a","b","c","d","e","f","g","h")"#,
            Ok(r#"border-style: border("a","b","c","d","e","f","g","h");"#),
        ),
        fixture(
            r#"border-style: border("\"","\x41","\102","\u0041","\U00000041","abc","a\"b","\\")"#,
            Ok(r#"border-style: border("\"","A","B","A","A","abc","a\"b","\\");"#),
        ),
        fixture(
            r#"border: border("a","b","c","d","e","f","g","h") true false"#,
            Ok("border-style: border(\"a\",\"b\",\"c\",\"d\",\"e\",\"f\",\"g\",\"h\");\nborder-top: true;"),
        ),
        fixture("border: rounded", Ok(r#"border-style: border("─","─","│","│","╭","╮","╯","╰");"#)),
        fixture(
            "border: dotted",
            Err(r#"in "border: dotted": border not recognized: "dotted""#),
        ),
        fixture("padding: 1 2", Ok("padding-bottom: 1;\npadding-left: 2;\npadding-right: 2;\npadding-top: 1;")),
        fixture("padding: 1 2 3 4 5", Ok("")),
        fixture("width", Err(r#"invalid syntax: "width""#)),
        fixture("width:", Err(r#"in "width:": missing value"#)),
        fixture("width: wide", Err(r#"in "width: wide": expected int value, found "wide""#)),
        fixture("sparkle: true", Err(r#"in "sparkle: true": property not supported: "sparkle""#)),
        fixture(
            "set-bold: true",
            Err(r#"in "set-bold: true": don't use "set-bold: true"; use "bold: true" instead"#),
        ),
        fixture(
            "unset-bold: true",
            Err(r#"in "unset-bold: true": don't use "unset-bold: ..."; use "bold: unset" instead"#),
        ),
        fixture(
            "get-bold: true",
            Err(r#"in "get-bold: true": don't use "get-bold: ..."; use "bold: ..." instead"#),
        ),
        fixture(
            "inherit: true",
            Err(r#"in "inherit: true": style has method inherit, but method uses unsupported argument type Style"#),
        ),
        Fixture {
            src: Style::new().border_style(Border::thick()),
            input: "border-style: unset",
            expected: Ok(""),
        },
    ]
}

#[test]
fn test_import_fixtures() {
    init_tracing();

    for (index, case) in fixtures().into_iter().enumerate() {
        let result = tinct::import(case.src, case.input);
        match (result, case.expected) {
            (Ok(style), Ok(expected)) => {
                assert_eq!(
                    tinct::export(&style, &lines()),
                    expected,
                    "case {index}: {:?}",
                    case.input
                );
            }
            (Err(err), Err(expected)) => {
                assert_eq!(err.to_string(), expected, "case {index}: {:?}", case.input);
            }
            (Ok(style), Err(expected)) => {
                panic!("case {index}: expected error {expected:?}, got {style:?}")
            }
            (Err(err), Ok(_)) => panic!("case {index}: unexpected error: {err}"),
        }
    }
}

// =========================================================================
// Export
// =========================================================================

fn sample() -> Style {
    Style::new()
        .bold(true)
        .align(Position::CENTER)
        .foreground(Color::code("#FAFAFA"))
        .background(Color::code("#7D56F4"))
        .border_top_foreground(Color::code("12"))
        .padding_top(2)
        .padding_left(4)
        .width(22)
}

#[test]
fn test_export_shortened() {
    let expected = "\
align: 0.5;
background: #7D56F4;
bold: true;
border-top-foreground: 12;
foreground: #FAFAFA;
padding-left: 4;
padding-top: 2;
width: 22;";
    assert_eq!(tinct::export(&sample(), &lines()), expected);
}

#[test]
fn test_export_full() {
    let expected = r#"align: 0.5;
align-vertical: 0;
background: #7D56F4;
blink: false;
bold: true;
border-bottom: false;
border-bottom-background: none;
border-bottom-foreground: none;
border-left: false;
border-left-background: none;
border-left-foreground: none;
border-right: false;
border-right-background: none;
border-right-foreground: none;
border-style: border("","","","","","","","");
border-top: false;
border-top-background: none;
border-top-foreground: 12;
color-whitespace: false;
faint: false;
foreground: #FAFAFA;
height: 0;
inline: false;
italic: false;
margin-background: none;
margin-bottom: 0;
margin-left: 0;
margin-right: 0;
margin-top: 0;
max-height: 0;
max-width: 0;
padding-bottom: 0;
padding-left: 4;
padding-right: 0;
padding-top: 2;
reverse: false;
strikethrough: false;
strikethrough-spaces: false;
underline: false;
underline-spaces: false;
width: 22;"#;
    assert_eq!(tinct::export(&sample(), &lines().with_defaults(true)), expected);
}

#[test]
fn test_default_suppression() {
    assert_eq!(tinct::export(&Style::new(), &ExportOptions::default()), "");

    let full = tinct::export(&Style::new(), &lines().with_defaults(true));
    let registry = PropertyRegistry::global();
    for line in full.lines() {
        let (name, _) = line.split_once(':').unwrap();
        assert!(registry.resolve(name).is_ok(), "{name} is not importable");
    }
    assert_eq!(full.lines().count(), 41);
}

// =========================================================================
// Round trip and directive semantics
// =========================================================================

fn busy() -> Style {
    let mut border = Border::double();
    border.top = "\"\\\u{1}".into();
    border.bottom_left = "é\u{2028}".into();

    Style::new()
        .bold(true)
        .underline_spaces(true)
        .inline(true)
        .foreground(Color::adaptive("#333", "#EEE"))
        .margin_background(Color::code("236"))
        .max_width(80)
        .height(3)
        .padding(&[1, 2, 3, 4])
        .margin(&[5, 6])
        .align(Position(0.25))
        .align_vertical(Position::BOTTOM)
        .border(border, &[true, false, true])
        .border_foreground(&[Color::code("1"), Color::code("2")])
        .border_left_background(Color::code("#abc"))
}

#[test]
fn test_round_trip_with_defaults() {
    init_tracing();

    let style = busy();
    let text = tinct::export(&style, &ExportOptions::new().with_defaults(true));
    let imported = tinct::import(Style::new(), &text).unwrap();
    assert_eq!(imported, style);
}

#[test]
fn test_round_trip_without_defaults() {
    let style = busy();
    let text = tinct::export(&style, &ExportOptions::default());
    assert_eq!(tinct::import(Style::new(), &text).unwrap(), style);
}

#[test]
fn test_round_trip_loses_zero_alignment() {
    // top and left are the zero position, indistinguishable from unset.
    let style = tinct::import(Style::new().align(Position::CENTER), "align: left").unwrap();
    let text = tinct::export(&style, &ExportOptions::default());
    assert_eq!(text, "");
    assert_eq!(tinct::import(Style::new(), &text).unwrap(), style);
}

#[test]
fn test_clear_is_idempotent() {
    for start in [Style::new(), sample(), busy()] {
        assert_eq!(tinct::import(start.clone(), "clear").unwrap(), Style::new());
        assert_eq!(tinct::import(start, "clear; clear").unwrap(), Style::new());
    }
}

#[test]
fn test_last_write_wins() {
    for start in [Style::new(), sample()] {
        assert_eq!(
            tinct::import(start.clone(), "padding-left: 1; padding-left: 2").unwrap(),
            tinct::import(start, "padding-left: 2").unwrap()
        );
    }
}

#[test]
fn test_variadic_border_flags() {
    let start = Style::new().border_left(true);
    let style = tinct::import(start, r#"border: border("a","b","c","d","e","f","g","h") true false"#)
        .unwrap();
    assert!(style.get_border_top());
    assert!(!style.get_border_bottom());
    assert!(style.get_border_left());
    assert!(!style.get_border_right());
    assert_eq!(style.get_border_top_size(), 1);
    assert_eq!(style.get_border_bottom_size(), 0);
}

#[test]
fn test_escape_fidelity() {
    let style = tinct::import(
        Style::new(),
        r#"border-style: border("\x41","\"","","","","","","")"#,
    )
    .unwrap();
    let border = style.get_border_style();
    assert_eq!(border.top, "A");
    assert_eq!(border.bottom, "\"");
    assert_eq!(
        tinct::export(&style, &ExportOptions::default()),
        r#"border-style: border("A","\"","","","","","","");"#
    );
}

#[test]
fn test_semicolon_inside_quotes_splits_directive() {
    // Directives are split on ';' before values are parsed.
    let err = tinct::import(
        Style::new(),
        r#"border-style: border(";","","","","","","","")"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Directive { .. }));
}

#[test]
fn test_semicolon_glyph_round_trips() {
    let glyphs = [";", "─", "│", "│", "╭", "╮", "╯", "╰"].map(String::from);
    let style = Style::new().border_style(Border::from_fields(glyphs));

    for options in [ExportOptions::new(), ExportOptions::new().with_defaults(true)] {
        let text = tinct::export(&style, &options);
        assert!(text.contains(r#"border("\x3b""#), "{text}");
        assert_eq!(tinct::import(Style::new(), &text).unwrap(), style);
    }
}

#[test]
fn test_wide_integers_round_trip() {
    let style = Style::new().width(usize::MAX).margin_left(usize::MAX);
    let text = tinct::export(&style, &ExportOptions::default());
    assert_eq!(
        text,
        format!("margin-left: {0}; width: {0};", usize::MAX)
    );
    assert_eq!(tinct::import(Style::new(), &text).unwrap(), style);
}

#[test]
fn test_import_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "bold: true;").unwrap();
    writeln!(file, "padding: 1 2;").unwrap();
    writeln!(file, "foreground: adaptive(0, 15);").unwrap();

    let style = tinct::import_file(Style::new(), file.path()).unwrap();
    assert_eq!(
        style,
        Style::new()
            .bold(true)
            .padding(&[1, 2])
            .foreground(Color::adaptive("0", "15"))
    );
}

#[test]
fn test_import_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tinct");
    let err = tinct::import_file(Style::new(), &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.tinct"));
}
