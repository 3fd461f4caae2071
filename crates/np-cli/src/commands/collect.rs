//! Collect command implementation

use anyhow::Result;
use np_core::ProfileRecord;
use np_jinja::ProfileContext;
use np_pipeline::ProfileEnv;
use serde_json::Value;

use crate::cli::{CollectArgs, CollectOutput, GlobalArgs};
use crate::commands::common::{load_project, parse_nhoods};
use crate::status::StatusLine;

/// Execute the collect command
pub(crate) fn execute(args: &CollectArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let status = StatusLine::new();
    let env = ProfileEnv::load(project, &status)?;
    let names = env.select_names(&parse_nhoods(&args.nhoods))?;
    let records = env.collect_records(&names, &status)?;
    drop(status);

    match args.output {
        CollectOutput::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        CollectOutput::Table => {
            for record in &records {
                print!("{}", format_table(record)?);
            }
        }
    }
    Ok(())
}

/// The values a profile template would see, one `key  value` line each
fn format_table(record: &ProfileRecord) -> Result<String> {
    let context = serde_json::to_value(ProfileContext::from(record))?;
    let mut out = format!("== {} ==\n", record.name);
    if let Value::Object(fields) = context {
        let width = fields.keys().map(|k| k.len()).max().unwrap_or(0);
        for (key, value) in fields {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            out.push_str(&format!("{key:<width$}  {text}\n"));
        }
    }
    out.push('\n');
    Ok(out)
}
