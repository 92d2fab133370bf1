pub mod download_conf;
pub mod export;
pub mod images;
pub mod parse;
pub mod site;
