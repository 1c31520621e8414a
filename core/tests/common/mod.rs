// Felles testdata: en liten økt-side med to økter.
#![allow(dead_code)]

pub fn two_workout_page() -> String {
    let mut lines = vec![
        "<html>",
        "<body>",
        "<h4 class=\"glyph-icon flaticon-bike\">Week 1 Day 1</h4>",
        "<div class=\"one-third column workoutlist\">",
        "  <div class=\"textbar\">2min from 50 to 75% FTP</div>",
        "  <div class=\"textbar\"><span>10min</span> @ 90rpm, 65% FTP</div>",
        "  <div class=\"textbar\">5min from 75 to 40% FTP</div>",
        "</div>",
        "<!-- <div class=\"workoutlist\"><div>commented out</div></div> -->",
    ];
    lines.extend(std::iter::repeat("<p>spacer</p>").take(11));
    lines.extend([
        "<h4 class=\"glyph-icon flaticon-bike\">Week 1 / Day 2</h4>",
        "<div class=\"workoutlist\">",
        "  <div class=\"textbar\">5x 30sec @ 120% FTP,30sec @ 50% FTP</div>",
        "  <div class=\"textbar\">10min free ride</div>",
        "</div>",
        "</body></html>",
    ]);
    lines.join("\n")
}
