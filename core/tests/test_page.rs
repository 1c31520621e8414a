mod common;

use zwoforge_core::{compile_html_json, compile_page, extract_page, CompileConfig, RawStep};

#[test]
fn extracts_steps_with_source_lines_and_titles() {
    let page = extract_page(&common::two_workout_page());

    assert_eq!(page.titles, ["Week 1 Day 1", "Week 1 / Day 2"]);
    assert_eq!(
        page.steps,
        vec![
            RawStep::new("2min from 50 to 75% FTP", 5),
            RawStep::new("10min @ 90rpm, 65% FTP", 6),
            RawStep::new("5min from 75 to 40% FTP", 7),
            RawStep::new("5x 30sec @ 120% FTP,30sec @ 50% FTP", 23),
            RawStep::new("10min free ride", 24),
        ]
    );
}

#[test]
fn nested_divs_stay_inside_their_step() {
    let html = "<div class=\"workoutlist\">\n<div><div class=\"x\">10min</div> free ride</div>\n</div>";
    let page = extract_page(html);
    assert_eq!(page.steps, vec![RawStep::new("10min free ride", 2)]);
}

#[test]
fn scraped_page_compiles_end_to_end() {
    let scraped = extract_page(&common::two_workout_page());
    let page = compile_page(&scraped.steps, &scraped.titles, &CompileConfig::default(), None).unwrap();

    assert!(page.is_complete());
    assert_eq!(page.workouts.len(), 2);
    assert_eq!(page.workouts[1].file_name, "Week 1 _ Day 2.zwo");
    assert!(page.workouts[1].xml.contains("<FreeRide Duration=\"600\" FlatRoad=\"0\"/>"));
}

#[test]
fn html_json_entry() {
    let input = serde_json::json!({
        "html": common::two_workout_page(),
        "config": { "numbering": "ordinal" }
    });
    let out = compile_html_json(&input.to_string()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["workouts"][0]["file_name"], "1 Week 1 Day 1.zwo");
    assert_eq!(v["workouts"][1]["steps"], 2);
    assert_eq!(v["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn unquoted_and_uppercase_markup() {
    let html = concat!(
        "<H4 CLASS=\"flaticon-bike\">Coach&#39;s &#8220;Pick&#8221;</H4>\n",
        "<DIV CLASS=workoutlist>\n",
        "<Div>10min @ 90rpm,&nbsp;65%&#x20;FTP</Div>\n",
        "</DIV>\n",
    );
    let page = extract_page(html);
    assert_eq!(page.titles, ["Coach's \u{201c}Pick\u{201d}"]);
    assert_eq!(page.steps, vec![RawStep::new("10min @ 90rpm, 65% FTP", 3)]);
}

#[test]
fn script_content_is_not_markup() {
    let html = concat!(
        "<script>document.write('<div class=\"workoutlist\"><div>1min free ride</div></div>');</script>\n",
        "<div class=\"workoutlist\">\n",
        "<div>10min free ride</div>\n",
        "<script>var s = \"<div>5min @ 60% FTP</div>\";</script>\n",
        "<div>20min @ 70% FTP</div>\n",
        "</div>\n",
    );
    let page = extract_page(html);
    assert_eq!(
        page.steps,
        vec![RawStep::new("10min free ride", 3), RawStep::new("20min @ 70% FTP", 5)]
    );
}
