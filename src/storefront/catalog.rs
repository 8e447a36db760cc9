//! The fixed vendor catalog
//!
//! Vendors are loaded once from a static table and never change afterwards.

use super::types::{Vendor, VendorId};

/// Raw catalog row: (id, name, fuel types, mechanic available, price, distance km)
type VendorRow = (u32, &'static str, &'static [&'static str], bool, f64, f64);

const VENDOR_TABLE: &[VendorRow] = &[
    (1, "HP Petrol Bunk", &["Petrol", "Diesel"], true, 102.0, 5.0),
    (2, "Indian Oil Bunk", &["Petrol"], false, 101.0, 9.0),
    (3, "Bharat Petroleum", &["Diesel"], true, 98.0, 12.0),
    (4, "Shell Petrol Station", &["Petrol", "Diesel", "Premium"], true, 105.0, 3.5),
    (5, "Reliance Petroleum", &["Petrol", "Diesel"], false, 100.0, 7.2),
    (6, "Essar Oil", &["Diesel"], true, 97.0, 8.5),
];

/// An immutable, ordered list of vendors
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    vendors: Vec<Vendor>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in storefront catalog
    pub fn standard() -> Self {
        let vendors = VENDOR_TABLE
            .iter()
            .map(|&(id, name, fuels, mechanic, price, distance)| {
                Vendor::new(VendorId(id), name, fuels, mechanic, price, distance)
            })
            .collect();
        Self { vendors }
    }

    /// Build a catalog from an arbitrary vendor list, keeping its order
    pub fn from_vendors(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// All vendors in insertion order
    pub fn list_vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// First vendor with the given id
    pub fn find_vendor(&self, id: VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|vendor| vendor.id == id)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}
