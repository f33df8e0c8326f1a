use ps_labels::*;
use std::io::Cursor;

fn sheet(name: &str) -> Sheet {
    sheet_spec_for_type(name).unwrap().resolve().unwrap()
}

fn run(job: &LabelJob, sheet: &Sheet, input: &str) -> (EmitSummary, String) {
    let mut out = Vec::new();
    let summary = make_labels(job, sheet, Cursor::new(input.as_bytes()), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

/// Label translations in the order they were written
fn offsets(document: &str) -> Vec<(i64, i64)> {
    let lines: Vec<&str> = document.lines().collect();
    lines
        .windows(2)
        .filter(|w| w[0] == "gsave")
        .map(|w| {
            let mut parts = w[1].split(' ').map(|p| p.parse::<i64>().unwrap());
            (parts.next().unwrap(), parts.next().unwrap())
        })
        .collect()
}

fn address_job(mode: InputMode, delimiter: Option<&str>) -> LabelJob {
    LabelJob {
        delimiter: delimiter.map(str::to_string),
        ..LabelJob::new(mode)
    }
}

#[test]
fn test_three_delimited_labels_on_one_page() {
    let sheet = sheet("avery5160");
    let input = "   A. One\n   Street 1\nXXXXX\n   B. Two\nXXXXX\n   C. Three\nXXXXX\n";
    let (summary, doc) = run(&address_job(InputMode::Line, Some("XXXXX")), &sheet, input);

    assert_eq!(summary.labels_placed, 3);
    assert_eq!(summary.pages, 1);
    // Column 0, rows 0..3; row pitch is 72
    assert_eq!(offsets(&doc), vec![(0, 0), (0, 72), (0, 144)]);
    assert_eq!(doc.matches("%%Page: labels").count(), 1);
    assert_eq!(doc.matches("showpage").count(), 1);
    assert!(doc.ends_with("grestore\n\n\nshowpage\n"));
}

#[test]
fn test_single_label_fills_exactly_one_page() {
    let sheet = sheet("avery5167");
    let input = "   J. Random User\n   1423 W. Rootbeer Ave\n   Chicago, IL 60622\n   USA\n";
    let (summary, doc) = run(&address_job(InputMode::Line, None), &sheet, input);

    assert_eq!(summary.labels_placed, 80);
    assert_eq!(summary.pages, 1);
    assert_eq!(doc.matches("(   J. Random User) show").count(), 80);
    assert_eq!(doc.matches("%%Page: labels").count(), 1);
    // The page is full, so its own terminator is the only one
    assert_eq!(doc.matches("showpage").count(), 1);
    assert!(doc.ends_with("grestore\n\nshowpage\n"));

    let offsets = offsets(&doc);
    assert_eq!(offsets[0], (0, 0));
    assert_eq!(offsets[20], (148, 0));
    assert_eq!(offsets[79], (445, 684));
}

#[test]
fn test_single_label_from_offset_fills_remainder() {
    let mut spec = sheet_spec_for_type("avery5167").unwrap();
    spec.first_label = Some(71);
    let sheet = spec.resolve().unwrap();
    let (summary, doc) = run(&address_job(InputMode::Line, None), &sheet, "Me\n");

    assert_eq!(summary.labels_placed, 10);
    assert_eq!(summary.pages, 1);
    assert_eq!(offsets(&doc)[0], (445, 360));
    assert_eq!(doc.matches("showpage").count(), 1);
}

#[test]
fn test_single_delimited_label_is_not_replicated() {
    let sheet = sheet("avery5167");
    let (summary, doc) = run(&address_job(InputMode::Line, Some("--")), &sheet, "Me\n--\n");

    assert_eq!(summary.labels_placed, 1);
    assert_eq!(doc.matches("showpage").count(), 1);
}

#[test]
fn test_single_csv_row_is_not_replicated() {
    let sheet = sheet("avery5167");
    let (summary, _) = run(&LabelJob::new(InputMode::Csv), &sheet, "\"Me\",\"Here\"\n");
    assert_eq!(summary.labels_placed, 1);
}

#[test]
fn test_labels_spill_onto_new_pages() {
    let sheet = sheet("avery5168"); // 2 x 2
    let input: String = (0..9).map(|i| format!("label {}\n%%\n", i)).collect();
    let (summary, doc) = run(&address_job(InputMode::Line, Some("%%")), &sheet, &input);

    assert_eq!(summary.labels_placed, 9);
    assert_eq!(summary.pages, 3);
    assert!(doc.contains("%%Page: labels 3\n"));
    assert!(!doc.contains("%%Page: labels 4\n"));
    // Two full pages plus the closing one
    assert_eq!(doc.matches("showpage").count(), 3);
}

#[test]
fn test_exactly_full_page_has_no_extra_terminator() {
    let sheet = sheet("avery5168");
    let input = "a\n%%\nb\n%%\nc\n%%\nd\n%%\n";
    let (summary, doc) = run(&address_job(InputMode::Line, Some("%%")), &sheet, input);

    assert_eq!(summary.pages, 1);
    assert_eq!(doc.matches("showpage").count(), 1);
    assert!(doc.ends_with("grestore\n\nshowpage\n"));
}

#[test]
fn test_first_label_out_of_range_is_config_error() {
    let mut spec = sheet_spec_for_type("avery5167").unwrap();
    spec.first_label = Some(81);
    assert!(matches!(spec.resolve(), Err(LabelError::Config(_))));
}

#[test]
fn test_csv_min_label_lines() {
    let sheet = sheet("avery5160");
    let job = LabelJob {
        min_label_lines: 4,
        ..LabelJob::new(InputMode::Csv)
    };
    let (_, doc) = run(
        &job,
        &sheet,
        "\"Ernest and Bertrand Muppet\",\"123 Sesame Street\"\n",
    );

    // Four lines: unscaled 12pt font, two blank shows at the bottom
    assert!(doc.contains("newpath\nISOTimes-Roman 12 scalefont setfont\n"));
    assert_eq!(doc.matches("\n3.000000 ").count(), 4);
    assert!(doc.contains("(Ernest and Bertrand Muppet) show\n"));
    assert_eq!(doc.matches("() show\n").count(), 2);
    assert!(doc.contains("3.000000 57.600000 moveto\n"));
}

#[test]
fn test_blank_csv_row_takes_a_slot() {
    let sheet = sheet("avery5160");
    let job = LabelJob {
        min_label_lines: 2,
        ..LabelJob::new(InputMode::Csv)
    };
    let (summary, doc) = run(&job, &sheet, "a,b\n\nc,d\n");

    assert_eq!(summary.labels_placed, 3);
    assert_eq!(offsets(&doc), vec![(0, 0), (0, 72), (0, 144)]);
    // The blank row is padded like any other short label
    assert_eq!(doc.matches("() show\n").count(), 2);
    assert!(doc.contains("(c) show\n"));
}

#[test]
fn test_padding_lines_get_leading_spaces() {
    let sheet = sheet("avery5160");
    let job = LabelJob {
        min_label_lines: 3,
        leading_spaces: 2,
        ..LabelJob::new(InputMode::Csv)
    };
    let (_, doc) = run(&job, &sheet, "Muppet\n");

    assert!(doc.contains("(  Muppet) show\n"));
    assert_eq!(doc.matches("(  ) show\n").count(), 2);
    assert!(!doc.contains("() show"));
}

#[test]
fn test_escaped_text_is_balanced() {
    let sheet = sheet("avery5160");
    let input = "Box (17)\nC:\\labels\n)(\n";
    let (_, doc) = run(&address_job(InputMode::Line, None), &sheet, input);

    assert!(doc.contains("(Box \\(17\\)) show\n"));
    assert!(doc.contains("(C:\\\\labels) show\n"));
    assert!(doc.contains("(\\)\\() show\n"));
    for line in doc.lines().filter(|l| l.ends_with(") show")) {
        let body = &line[1..line.len() - ") show".len()];
        let mut escaped = false;
        for ch in body.chars() {
            match (escaped, ch) {
                (false, '\\') => escaped = true,
                (false, '(' | ')') => panic!("unescaped paren in {:?}", line),
                _ => escaped = false,
            }
        }
        assert!(!escaped, "dangling escape in {:?}", line);
    }
}

#[test]
fn test_code_labels_are_clipped_and_translated() {
    let sheet = sheet("avery5160");
    let input = "0 0 moveto 50 50 lineto stroke\nXXXXX\n10 10 moveto (hi) show\nXXXXX\n";
    let (summary, doc) = run(&address_job(InputMode::Code, Some("XXXXX")), &sheet, input);

    assert_eq!(summary.labels_placed, 2);
    assert!(doc.contains(
        "gsave\n0 0\ntranslate\nlabelclip\n0 0 moveto 50 50 lineto stroke\ngrestore\n"
    ));
    assert!(doc.contains("gsave\n0 72\ntranslate\nlabelclip\n10 10 moveto (hi) show\ngrestore\n"));
    assert!(!doc.contains("newpath\nISO"));
}

#[test]
fn test_undelimited_code_is_replicated() {
    let sheet = sheet("avery5168");
    let (summary, doc) = run(&address_job(InputMode::Code, None), &sheet, "1 1 moveto\n");
    assert_eq!(summary.labels_placed, 4);
    assert_eq!(doc.matches("1 1 moveto\n").count(), 4);
}

#[test]
fn test_bounding_box_is_stroked() {
    let sheet = sheet("avery5160");
    let job = LabelJob {
        show_bounding_box: true,
        ..address_job(InputMode::Line, Some("--"))
    };
    let (_, doc) = run(&job, &sheet, "x\n--\n");
    assert!(doc.contains("\tclip\n\tstroke\n\n} def\n"));
}

#[test]
fn test_overlong_label_warns_once_without_changing_output() {
    let sheet = sheet("avery5160"); // 10 rows: threshold 16 lines
    let long: String = (0..20).map(|i| format!("line {}\n", i)).collect();
    let input = format!("{long}--\n{long}--\nshort\n--\n");
    let job = address_job(InputMode::Line, Some("--"));

    let (summary, doc) = run(&job, &sheet, &input);
    assert!(summary.overlong_warning);
    assert_eq!(summary.labels_placed, 3);
    assert_eq!(doc.matches("(line 19) show\n").count(), 2);

    let (summary, _) = run(&job, &sheet, "short\n--\n");
    assert!(!summary.overlong_warning);
}

#[test]
fn test_empty_input_writes_prologue_only() {
    let sheet = sheet("avery5160");
    let (summary, doc) = run(&address_job(InputMode::Line, None), &sheet, "");

    assert_eq!(summary, EmitSummary::default());
    assert!(doc.ends_with("% set font type and size\nISOTimes-Roman 12 scalefont setfont\n"));
    assert!(!doc.contains("showpage"));
}

#[test]
fn test_invalid_job_writes_nothing() {
    let sheet = sheet("avery5160");
    let job = LabelJob {
        leading_spaces: 2,
        ..LabelJob::new(InputMode::Code)
    };
    let mut out = Vec::new();
    let result = make_labels(&job, &sheet, Cursor::new("x\n"), &mut out);

    assert!(matches!(result, Err(LabelError::Config(_))));
    assert!(out.is_empty());
}
