mod product;

use serde::Deserialize;
use std::fs;
use std::path::Path;
use crate::error::Error;

pub use self::product::Product;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, Error> {
        serde_yaml::from_str(content).map_err(Error::from)
    }
}
