use almanac_core::error::AlmanacError;
use almanac_core::publish::download_conf;
use std::path::Path;

use crate::output;

pub fn run(csv_file: &Path) -> Result<(), AlmanacError> {
    let file = std::fs::File::open(csv_file)?;
    let conf = download_conf::generate(file)?;
    output::json::print(&conf)
}
