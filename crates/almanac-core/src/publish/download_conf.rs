use crate::error::AlmanacError;
use serde::Serialize;
use std::io::Read;

/// Config file for an image downloader, one search per card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DownloadConf {
    pub records: Vec<DownloadRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadRecord {
    pub keywords: String,
    pub limit: u32,
    pub print_urls: bool,
    pub size: String,
    pub usage_rights: String,
    pub aspect_ratio: String,
}

impl DownloadRecord {
    /// Search for large, reusable, wide images matching a card id.
    pub fn for_id(id: &str) -> Self {
        DownloadRecord {
            keywords: id.split('-').collect::<Vec<_>>().join(" "),
            limit: 5,
            print_urls: true,
            size: "large".into(),
            usage_rights: "labeled-for-reuse".into(),
            aspect_ratio: "wide".into(),
        }
    }
}

/// Build a download config from a CSV with an `ID` column.
pub fn generate<R: Read>(reader: R) -> Result<DownloadConf, AlmanacError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let id_col = rdr
        .headers()?
        .iter()
        .position(|h| h == "ID")
        .ok_or_else(|| AlmanacError::Catalog {
            path: "<csv>".into(),
            reason: "missing ID column".into(),
        })?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        if let Some(id) = row.get(id_col) {
            records.push(DownloadRecord::for_id(id));
        }
    }
    Ok(DownloadConf { records })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_csv() {
        let csv = "ID,Title\ngerm-theory-of-disease,Germ Theory\nfire,Fire\n";
        let conf = generate(csv.as_bytes()).unwrap();
        assert_eq!(conf.records.len(), 2);
        assert_eq!(conf.records[0].keywords, "germ theory of disease");

        let json = serde_json::to_value(&conf).unwrap();
        assert_eq!(json["Records"][1]["keywords"], "fire");
        assert_eq!(json["Records"][1]["limit"], 5);
        assert_eq!(json["Records"][1]["usage_rights"], "labeled-for-reuse");
    }

    #[test]
    fn test_missing_id_column() {
        assert!(generate("Title\nFire\n".as_bytes()).is_err());
    }
}
