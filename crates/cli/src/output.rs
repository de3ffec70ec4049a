use crate::error::CliError;
use serde::Serialize;

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)
}

pub async fn write_json<T: Serialize>(value: &T, path: String) -> Result<(), CliError> {
    let json = to_pretty_json(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = to_pretty_json(value)?;
    println!("{json}");
    Ok(())
}
