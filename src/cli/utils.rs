use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::error::ApiError;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(extra)) = data {
                response
                    .as_object_mut()
                    .expect("response is an object")
                    .extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a fetched resource: pretty JSON, or the prepared text lines.
pub fn output_resource<T: Serialize>(
    output_format: &OutputFormat,
    resource: &T,
    text: String,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(resource)?);
        }
        OutputFormat::Text => {
            println!("{}", text);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Print the translated user-facing message and exit non-zero.
pub fn fail(output_format: &OutputFormat, err: &ApiError) -> ! {
    let translated = err.user_facing();
    let code = translated.status.map(|s| s.to_string());
    let _ = output_error(output_format, &translated.message, code.as_deref());
    std::process::exit(1);
}

/// Parse a CLI argument through the wire representation of a DTO enum,
/// e.g. `HIGH` for a priority or `MEMBER` for a role.
pub fn parse_wire_enum<T: DeserializeOwned>(kind: &str, value: &str) -> anyhow::Result<T> {
    serde_json::from_value(Value::String(value.to_string()))
        .map_err(|_| anyhow::anyhow!("invalid {}: {:?}", kind, value))
}
