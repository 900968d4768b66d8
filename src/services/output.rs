use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(true, data)?;
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> anyhow::Result<String>,
) -> anyhow::Result<()> {
    if json {
        print_json(true, data)?;
    } else {
        println!("{}", text(&data)?);
    }
    Ok(())
}

/// Single-line JSON array for name lists consumed by other scripts.
pub fn json_list(names: &[String]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(names)?)
}
