//! Product catalog: the data source behind the showcase.
//!
//! Entries are authored as data (an embedded JSON document, optionally
//! overridden by a file on the command line) and are read-only after
//! loading. Binding is explicit and fails fast: an empty or malformed
//! catalog is a descriptive configuration error, never a silently
//! half-wired page.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::lang::Language;

/// Catalog shipped with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Generic feature list used when a product has no authored features.
pub const GENERIC_FEATURES: [&str; 3] = [
    "Producto de alta calidad",
    "Disponible para alquiler",
    "Entrega incluida",
];

/// Errors raised while binding the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no products")]
    Empty,
}

/// Product category tags, matching the authored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vajilla,
    Cristaleria,
    Decoracion,
    Mobiliario,
    Flores,
}

impl Category {
    /// All categories, in filter-bar order.
    pub const ALL: [Category; 5] = [
        Category::Vajilla,
        Category::Cristaleria,
        Category::Decoracion,
        Category::Mobiliario,
        Category::Flores,
    ];

    /// Filter-bar label for the category.
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Category::Vajilla, Language::Es) => "Vajilla",
            (Category::Vajilla, Language::En) => "Tableware",
            (Category::Cristaleria, Language::Es) => "Cristalería",
            (Category::Cristaleria, Language::En) => "Glassware",
            (Category::Decoracion, Language::Es) => "Decoración",
            (Category::Decoracion, Language::En) => "Decor",
            (Category::Mobiliario, Language::Es) => "Mobiliario",
            (Category::Mobiliario, Language::En) => "Furniture",
            (Category::Flores, Language::Es) => "Flores",
            (Category::Flores, Language::En) => "Floral",
        }
    }
}

/// Active product filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Cycles to the next filter in filter-bar order, wrapping to All.
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Category(Category::ALL[0]),
            Filter::Category(cat) => {
                let idx = Category::ALL.iter().position(|c| *c == cat).unwrap_or(0);
                match Category::ALL.get(idx + 1) {
                    Some(next) => Filter::Category(*next),
                    None => Filter::All,
                }
            }
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match self {
            Filter::All => crate::lang::strings(lang).filter_all,
            Filter::Category(cat) => cat.label(lang),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::Es))
    }
}

/// One product entry. Never mutated at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEntry {
    pub title: String,
    pub image: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductEntry>,
}

/// The bound, validated product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<ProductEntry>,
    /// Indexes of entries whose image file was missing at preload time.
    missing_art: HashSet<usize>,
}

impl Catalog {
    /// Binds the catalog from a file, or from the embedded document when
    /// no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let raw = match path {
            Some(p) => std::fs::read_to_string(p).map_err(|source| CatalogError::Read {
                path: p.display().to_string(),
                source,
            })?,
            None => EMBEDDED_CATALOG.to_string(),
        };
        Self::from_json(&raw)
    }

    /// Parses and validates a catalog document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        if file.products.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self {
            products: file.products,
            missing_art: HashSet::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&ProductEntry> {
        self.products.get(idx)
    }

    /// Indexes of products matching the filter, in catalog order.
    pub fn filtered_indices(&self, filter: Filter) -> Vec<usize> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| match filter {
                Filter::All => true,
                Filter::Category(cat) => p.category == cat,
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Feature list for a product looked up by title. Unknown titles, and
    /// entries authored without features, fall back to the generic list.
    pub fn features_for(&self, title: &str) -> Vec<String> {
        self.products
            .iter()
            .find(|p| p.title == title)
            .and_then(|p| p.features.clone())
            .unwrap_or_else(|| GENERIC_FEATURES.iter().map(|s| s.to_string()).collect())
    }

    /// Preload pass over the product art. Missing files hide the card art
    /// and log a diagnostic; they never fail the app.
    pub fn verify_images(&mut self, root: &Path) {
        for (idx, product) in self.products.iter().enumerate() {
            if !root.join(&product.image).is_file() {
                warn!(image = %product.image, title = %product.title, "image failed to load");
                self.missing_art.insert(idx);
            }
        }
    }

    /// Whether the card art for an entry should be drawn.
    pub fn art_visible(&self, idx: usize) -> bool {
        !self.missing_art.contains(&idx)
    }
}
