// web_app/model/sellers.rs - Curated seller directory
//
// The list itself lives in data/sellers.json and is compiled into the binary,
// so the select box renders identically on the server and in the browser.

use serde::{Deserialize, Serialize};

const BUILTIN_SELLERS: &str = include_str!("../../../data/sellers.json");

/// A seller shop on Rakuten that the team follows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSeller {
    /// Display name (usually Japanese)
    pub name: String,
    /// Rakuten shop identifier, sent verbatim as the `seller` payload
    pub id: String,
    /// Preferred sellers are listed first
    #[serde(default)]
    pub starred: bool,
}

#[derive(Deserialize)]
struct SellerTable {
    sellers: Vec<KnownSeller>,
}

/// Known sellers split into starred and other groups
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SellerDirectory {
    starred: Vec<KnownSeller>,
    others: Vec<KnownSeller>,
}

impl SellerDirectory {
    /// Parse a seller table. Rows without an id are separators and are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let table: SellerTable = serde_json::from_str(json)?;

        let (starred, others) = table
            .sellers
            .into_iter()
            .filter(|seller| !seller.id.trim().is_empty())
            .partition(|seller| seller.starred);

        Ok(SellerDirectory { starred, others })
    }

    /// The table shipped in data/sellers.json
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_SELLERS) {
            Ok(directory) => directory,
            Err(e) => {
                tracing::error!("Seller table is malformed, showing no sellers: {}", e);
                SellerDirectory::default()
            }
        }
    }

    pub fn starred(&self) -> &[KnownSeller] {
        &self.starred
    }

    pub fn others(&self) -> &[KnownSeller] {
        &self.others
    }

    /// Look up a seller by id across both groups
    pub fn find(&self, id: &str) -> Option<&KnownSeller> {
        self.starred.iter().chain(self.others.iter()).find(|seller| seller.id == id)
    }
}
