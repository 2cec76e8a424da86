//! The sample case file under `demos/` loads and computes end to end.

use std::path::Path;

use fem_core::report::render_all;
use fem_core::{calculate, load_case_file, CalcResult, FixedEndMomentResult};

#[test]
fn demo_case_file_runs() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/cases.json");
    let file = load_case_file(&path).unwrap();
    assert_eq!(file.cases.len(), 2);

    let results: CalcResult<Vec<FixedEndMomentResult>> = file.cases.iter().map(calculate).collect();
    let results = results.unwrap();

    assert_eq!(results[0].midspan_check, Some(-7.5));
    assert_eq!(results[1].midspan_check, None);

    let text = render_all(&results, &file.settings);
    assert!(text.contains("Case: G-1 midspan"));
    assert!(text.contains("(M_A) = -8.8889 kN·m"));
    assert!(text.contains("(M_B) = -4.4444 kN·m"));
}
