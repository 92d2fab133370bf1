use crate::error::AlmanacError;
use crate::site::schema::SiteConfig;
use crate::site::validate_site_config;

const CARDS_JSON: &str = include_str!("../../../../sites/cards.json");
const ASIMOV_JSON: &str = include_str!("../../../../sites/asimov.json");

/// Available predefined site configurations.
pub const PRESETS: &[&str] = &["cards", "asimov"];

/// Load a predefined site configuration by name.
pub fn load_preset(name: &str) -> Result<SiteConfig, AlmanacError> {
    let json = match name {
        "cards" => CARDS_JSON,
        "asimov" => ASIMOV_JSON,
        _ => {
            return Err(AlmanacError::SiteConfigInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let config: SiteConfig = serde_json::from_str(json)?;
    validate_site_config(&config)?;
    Ok(config)
}
