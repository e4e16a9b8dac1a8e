//! Cart and order-form input files.
//!
//! Both are read as YAML, which also accepts plain JSON.
//!
//! ```yaml
//! # cart.yaml
//! - { id: 1, name: 現代舒適三人沙發, price: 45800, qty: 1 }
//! - { id: 2, name: 多功能模組沙發, price: 68000, qty: 2 }
//!
//! # order.yaml
//! name: Amy
//! phone: "0912345678"
//! email: a@b.com
//! delivery: 宅配
//! payment: 信用卡
//! ```

use std::path::{Path, PathBuf};

use sova_home_checkout::{CartSource, LineItem, OrderForm};
use thiserror::Error;

/// Errors reading an input file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// A cart snapshot stored on disk.
#[derive(Debug, Clone)]
pub struct FileCart {
    path: PathBuf,
}

impl FileCart {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartSource for FileCart {
    type Error = FileError;

    fn load(&self) -> Result<Vec<LineItem>, Self::Error> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| FileError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse(&self.path, &content)
    }
}

/// Read an order form file.
pub async fn read_order_form(path: &Path) -> Result<OrderForm, FileError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FileError::Io {
            path: path.to_owned(),
            source,
        })?;
    parse(path, &content)
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, content: &str) -> Result<T, FileError> {
    serde_yaml::from_str(content).map_err(|source| FileError::Parse {
        path: path.to_owned(),
        source,
    })
}
