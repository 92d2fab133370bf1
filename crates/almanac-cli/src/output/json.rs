use almanac_core::error::AlmanacError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), AlmanacError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
