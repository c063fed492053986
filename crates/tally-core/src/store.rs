//! Record store - JSON snapshot persistence for products, sales, expenses
//!
//! The store owns the ordered record collections and the last advisory
//! text. It loads once at startup (load-or-default) and saves the full
//! snapshot on every mutation, replacing the file atomically. There is no
//! partial update: the dataset is small-business sized.
//!
//! Validation lives here too. Records reaching the aggregator and insight
//! engines are always well formed; edge cases like zero stock or zero
//! revenue are legal data, not errors.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Expense, NewExpense, NewProduct, Product, Sale};

/// Serialized snapshot layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    sales: Vec<Sale>,
    #[serde(default)]
    expenses: Vec<Expense>,
    /// Last advisory text shown to the user, kept across sessions.
    #[serde(default)]
    last_insight: Option<String>,
}

/// Persistent record store
pub struct RecordStore {
    /// Snapshot path; None keeps the store in memory (tests).
    path: Option<PathBuf>,
    data: StoreData,
}

impl RecordStore {
    /// Open the store at `path`, or start empty when no snapshot exists yet.
    ///
    /// A snapshot that exists but fails to parse is an error; silently
    /// starting empty would discard the user's records on the next save.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            StoreData::default()
        };
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// Create an unpersisted store for tests.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: StoreData::default(),
        }
    }

    /// Default snapshot location: the platform data directory, or the
    /// current directory when none is available.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("tally").join("tally.json"))
            .unwrap_or_else(|| PathBuf::from("tally.json"))
    }

    /// Ordered product collection.
    pub fn products(&self) -> &[Product] {
        &self.data.products
    }

    /// Ordered sale ledger.
    pub fn sales(&self) -> &[Sale] {
        &self.data.sales
    }

    /// Ordered expense ledger.
    pub fn expenses(&self) -> &[Expense] {
        &self.data.expenses
    }

    /// Last advisory text persisted across sessions.
    pub fn last_insight(&self) -> Option<&str> {
        self.data.last_insight.as_deref()
    }

    /// Look up a product by id.
    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.data.products.iter().find(|p| p.id == id)
    }

    /// Register a new product.
    pub fn add_product(&mut self, new: NewProduct) -> Result<Product> {
        if new.name.trim().is_empty() {
            return Err(Error::InvalidData("product name must not be empty".into()));
        }
        if new.cost_price < 0.0 || new.selling_price < 0.0 {
            return Err(Error::InvalidData(
                "product prices must not be negative".into(),
            ));
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            cost_price: new.cost_price,
            selling_price: new.selling_price,
            stock: new.stock,
            category: new.category,
            image: new.image,
        };
        self.data.products.push(product.clone());
        self.save()?;
        Ok(product)
    }

    /// Delete a product.
    ///
    /// Historical sales of the product stay in the ledger untouched; they
    /// reference it by value only.
    pub fn delete_product(&mut self, id: &str) -> Result<()> {
        let before = self.data.products.len();
        self.data.products.retain(|p| p.id != id);
        if self.data.products.len() == before {
            return Err(Error::NotFound(format!("product {}", id)));
        }
        self.save()
    }

    /// Record a sale of `quantity` units of the given product.
    ///
    /// Freezes the product name, total amount, and profit into the sale,
    /// then decrements stock, flooring at zero.
    pub fn record_sale(&mut self, product_id: &str, quantity: u32) -> Result<Sale> {
        if quantity == 0 {
            return Err(Error::InvalidData("sale quantity must be positive".into()));
        }

        let product = self
            .data
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| Error::NotFound(format!("product {}", product_id)))?;

        let total_amount = product.selling_price * quantity as f64;
        let profit = (product.selling_price - product.cost_price) * quantity as f64;

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            total_amount,
            profit,
            date: Utc::now(),
        };

        product.stock = product.stock.saturating_sub(quantity);

        self.data.sales.push(sale.clone());
        self.save()?;
        Ok(sale)
    }

    /// Register a new expense.
    pub fn add_expense(&mut self, new: NewExpense) -> Result<Expense> {
        if new.amount < 0.0 {
            return Err(Error::InvalidData(
                "expense amount must not be negative".into(),
            ));
        }

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            description: new.description,
            amount: new.amount,
            category: new.category,
            date: Utc::now(),
        };
        self.data.expenses.push(expense.clone());
        self.save()?;
        Ok(expense)
    }

    /// Delete an expense.
    pub fn delete_expense(&mut self, id: &str) -> Result<()> {
        let before = self.data.expenses.len();
        self.data.expenses.retain(|e| e.id != id);
        if self.data.expenses.len() == before {
            return Err(Error::NotFound(format!("expense {}", id)));
        }
        self.save()
    }

    /// Persist the advisory text last shown to the user.
    pub fn set_last_insight(&mut self, text: impl Into<String>) -> Result<()> {
        self.data.last_insight = Some(text.into());
        self.save()
    }

    /// Write the snapshot atomically: serialize to a temp file in the
    /// target directory, then rename over the previous snapshot.
    fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path,
            None => return Ok(()),
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let json = serde_json::to_string_pretty(&self.data)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;

        debug!(path = %path.display(), "snapshot saved");
        Ok(())
    }
}
