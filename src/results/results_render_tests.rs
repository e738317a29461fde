use super::*;
use crate::api::Source;
use crate::test_utils::test_helpers::rainfall_result;
use serde_json::json;

fn plain(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

#[test]
fn test_rainfall_scenario_lines() {
    let lines = plain(&build_lines(&rainfall_result(), 80));
    assert_eq!(
        lines,
        vec![
            "Answer",
            "  42mm",
            "",
            "Sources (1)",
            "  RainDB",
            "  Region: X",
            "  File: x.csv",
            "  annual rainfall",
            "",
            "Raw Data",
            "  {",
            "    \"value\": 42",
            "  }",
        ]
    );
}

#[test]
fn test_empty_sources_are_cleared() {
    let mut result = rainfall_result();
    result.sources.clear();

    let lines = plain(&build_lines(&result, 80));
    assert!(lines.contains(&"Sources (0)".to_string()));
    assert!(lines.contains(&"  No sources cited".to_string()));
    assert!(!lines.iter().any(|l| l.contains("RainDB")));
}

#[test]
fn test_source_blocks_are_separated_and_ordered() {
    let mut result = rainfall_result();
    result.sources.push(Source {
        dataset: "CropDB".to_string(),
        region: "Y".to_string(),
        file: "y.csv".to_string(),
        period: Some("2015".to_string()),
        description: "yield".to_string(),
    });

    let lines = plain(&build_lines(&result, 80));
    let rain = lines.iter().position(|l| l == "  RainDB").unwrap();
    let crop = lines.iter().position(|l| l == "  CropDB").unwrap();
    assert!(rain < crop);
    assert_eq!(lines[crop - 1], "");
    assert_eq!(lines[crop + 3], "  Period: 2015");
}

#[test]
fn test_long_answer_wraps_to_width() {
    let mut result = rainfall_result();
    result.answer = "The average annual rainfall across Tamil Nadu is 998mm".to_string();
    result.raw_data = json!(null);

    for line in plain(&build_lines(&result, 20)) {
        assert!(line.chars().count() <= 20, "too wide: {:?}", line);
    }
}

#[test]
fn test_answer_keeps_indented_list_layout() {
    let mut result = rainfall_result();
    result.answer = "Totals:\n    - Chennai:  1200 mm\n    - Salem:\t900 mm".to_string();

    let lines = plain(&build_lines(&result, 80));
    assert_eq!(
        &lines[..4],
        [
            "Answer",
            "  Totals:",
            "      - Chennai:  1200 mm",
            "      - Salem:    900 mm",
        ]
    );
}
