use memlog_engine::{aggregate, render_csv, render_js_payload, render_json};
use memlog_types::{MemoryRecord, SourceResult};

fn sample_result() -> SourceResult {
    [
        (
            "nightly-101".to_string(),
            vec![
                MemoryRecord::new("@home", 52_428_800),
                MemoryRecord::new("@checkout", 73_400_320),
            ],
        ),
        ("nightly-102".to_string(), vec![]),
        (
            "nightly-103".to_string(),
            vec![
                MemoryRecord::new("@checkout", 70_254_592),
                MemoryRecord::new("@home (mobile)", 31_457_280),
            ],
        ),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_js_payload_snapshot() {
    let table = aggregate(&sample_result(), false).table;
    let js = render_js_payload(&table).unwrap();

    insta::assert_snapshot!(js, @r#"
    ((win) => { win.LOG_DATA = [
        {
            "suite": "@home",
            "nightly-101": 52428800
        },
        {
            "suite": "@checkout",
            "nightly-101": 73400320,
            "nightly-103": 70254592
        },
        {
            "suite": "@home (mobile)",
            "nightly-103": 31457280
        }
    ]; })(window.top);
    "#);
}

#[test]
fn test_csv_snapshot() {
    let columns = aggregate(&sample_result(), true).csv.unwrap();
    let csv = render_csv(&columns).unwrap();

    insta::assert_snapshot!(csv, @r"
    Suite,nightly-101,nightly-102,nightly-103
    @home,52428800
    @checkout,73400320,70254592
    @home (mobile),31457280
    ");
}

#[test]
fn test_end_to_end_single_build() {
    let result: SourceResult = [("run1".to_string(), vec![MemoryRecord::new("@home", 500)])]
        .into_iter()
        .collect();
    let aggregate = aggregate(&result, true);

    let json: serde_json::Value =
        serde_json::from_str(&render_json(&aggregate.table).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!([{ "suite": "@home", "run1": 500 }]));

    let csv = render_csv(aggregate.csv.as_ref().unwrap()).unwrap();
    assert_eq!(csv, "Suite,run1\n@home,500");
}

#[test]
fn test_empty_table_renders_empty_array() {
    let aggregate = aggregate(&SourceResult::new(), true);

    assert_eq!(render_json(&aggregate.table).unwrap(), "[]");
    assert_eq!(render_csv(aggregate.csv.as_ref().unwrap()).unwrap(), "Suite");
}
