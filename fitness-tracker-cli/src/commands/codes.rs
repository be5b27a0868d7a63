use anyhow::Result;
use serde_json::json;

use super::AppContext;
use crate::config::OutputFormat;
use crate::training::WorkoutCode;

pub fn list_codes(ctx: &AppContext) -> Result<()> {
    match ctx.output_format()? {
        OutputFormat::Json => {
            let codes: Vec<_> = WorkoutCode::ALL
                .iter()
                .map(|code| {
                    json!({
                        "code": code.as_str(),
                        "training_type": code.training_type(),
                        "fields": code.field_names(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&codes)?);
        }
        OutputFormat::Text => {
            println!("Workout Codes");
            println!("────────────────────────────────");
            for code in WorkoutCode::ALL {
                println!(
                    "{}  {:<14} {}",
                    code,
                    code.training_type(),
                    code.field_names().join(", ")
                );
            }
        }
    }

    Ok(())
}
