use crate::domain::models::{CheckResult, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn result_text(r: &CheckResult) -> String {
    if r.success {
        return "integrity check passed".to_string();
    }
    let mut out = format!(
        "integrity check found {} inconsistencies",
        r.inconsistencies.len()
    );
    for inc in &r.inconsistencies {
        out.push_str("\n- ");
        out.push_str(inc);
    }
    out
}

pub fn print_result(json: bool, result: &CheckResult) -> anyhow::Result<()> {
    print_one(json, result, |r| result_text(r))
}
