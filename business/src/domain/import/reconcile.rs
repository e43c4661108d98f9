//! In-memory indexes used to match spreadsheet rows against stored records.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::distributor::errors::DistributorError;
use crate::domain::distributor::model::{Distributor, NewDistributorProps};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::shared::text::{name_key, normalize_ean};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductMatch {
    /// Stored before this import, or created earlier in the same file.
    Reused(Uuid),
    Created(Uuid),
}

impl ProductMatch {
    pub fn id(&self) -> Uuid {
        match self {
            ProductMatch::Reused(id) | ProductMatch::Created(id) => *id,
        }
    }
}

/// Products keyed by [`name_key`] and separately by EAN.
///
/// Products created while resolving rows stay pending until the caller
/// persists them through [`ProductIndex::created`].
pub struct ProductIndex {
    products: Vec<Product>,
    by_name: HashMap<String, usize>,
    by_ean: HashMap<String, usize>,
    stored: usize,
    backfilled: Vec<usize>,
}

impl ProductIndex {
    pub fn new(existing: Vec<Product>) -> Self {
        let mut index = Self {
            products: Vec::with_capacity(existing.len()),
            by_name: HashMap::new(),
            by_ean: HashMap::new(),
            stored: existing.len(),
            backfilled: Vec::new(),
        };
        for product in existing {
            index.push(product);
        }
        index
    }

    fn push(&mut self, product: Product) -> usize {
        let position = self.products.len();
        self.by_name.entry(product.name_key()).or_insert(position);
        if let Some(ean) = normalize_ean(product.ean.as_deref()) {
            self.by_ean.entry(ean).or_insert(position);
        }
        self.products.push(product);
        position
    }

    fn position(&self, name: &str, ean: Option<&str>) -> Option<usize> {
        ean.and_then(|e| self.by_ean.get(e))
            .or_else(|| self.by_name.get(&name_key(name)))
            .copied()
    }

    pub fn find(&self, name: &str, ean: Option<&str>) -> Option<&Product> {
        self.position(name, ean).map(|p| &self.products[p])
    }

    /// Returns the matching product, creating a generic one when unknown.
    ///
    /// A stored product without EAN gets the row's EAN back-filled unless
    /// another product already owns it.
    pub fn resolve(
        &mut self,
        name: &str,
        ean: Option<&str>,
        manufacturer: Option<&str>,
    ) -> Result<ProductMatch, ProductError> {
        if let Some(position) = self.position(name, ean) {
            if let Some(ean) = ean
                && self.products[position].ean.is_none()
                && !self.by_ean.contains_key(ean)
            {
                self.products[position].ean = Some(ean.to_string());
                self.by_ean.insert(ean.to_string(), position);
                if position < self.stored {
                    self.backfilled.push(position);
                }
            }
            return Ok(ProductMatch::Reused(self.products[position].id));
        }

        let product = Product::new(NewProductProps {
            name: name.to_string(),
            ean: ean.map(str::to_string),
            manufacturer: manufacturer.map(str::to_string),
            category: Default::default(),
            unit: Default::default(),
        })?;
        let id = product.id;
        self.push(product);
        Ok(ProductMatch::Created(id))
    }

    /// Products created since the index was built, in creation order.
    pub fn created(&self) -> &[Product] {
        &self.products[self.stored..]
    }

    /// Stored products whose EAN was filled in.
    pub fn backfilled(&self) -> Vec<&Product> {
        self.backfilled.iter().map(|p| &self.products[*p]).collect()
    }
}

/// Distributors keyed by [`name_key`]; unknown names are created.
pub struct DistributorIndex {
    by_name: HashMap<String, Distributor>,
    created: Vec<Distributor>,
}

impl DistributorIndex {
    pub fn new(existing: Vec<Distributor>) -> Self {
        let mut by_name = HashMap::new();
        for distributor in existing {
            by_name.entry(distributor.name_key()).or_insert(distributor);
        }
        Self {
            by_name,
            created: Vec::new(),
        }
    }

    pub fn resolve(&mut self, name: &str) -> Result<Uuid, DistributorError> {
        if let Some(existing) = self.by_name.get(&name_key(name)) {
            return Ok(existing.id);
        }

        let distributor = Distributor::new(NewDistributorProps {
            name: name.to_string(),
            cnpj: None,
            contact: None,
            notes: None,
        })?;
        let id = distributor.id;
        self.by_name.insert(distributor.name_key(), distributor.clone());
        self.created.push(distributor);
        Ok(id)
    }

    pub fn created(&self) -> &[Distributor] {
        &self.created
    }
}
