//! Catalog, pricing and filter validation tests

use fuel_dispatch::storefront::{
    compute_total, filter_vendors, subtotal, Catalog, PriceBreakdown, ServiceType, Vendor,
    VendorFilter, VendorId, DELIVERY_CHARGE, MAX_DISTANCE_KM, MIN_DISTANCE_KM,
};

fn ids(vendors: &[&Vendor]) -> Vec<u32> {
    vendors.iter().map(|v| v.id.0).collect()
}

#[test]
fn test_standard_catalog_contents() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.len(), 6);
    assert!(!catalog.is_empty());
    assert!(Catalog::from_vendors(Vec::new()).is_empty());
    let listed: Vec<u32> = catalog.list_vendors().iter().map(|v| v.id.0).collect();
    assert_eq!(listed, vec![1, 2, 3, 4, 5, 6]);

    let shell = catalog.find_vendor(VendorId(4)).expect("vendor 4 exists");
    assert_eq!(shell.name, "Shell Petrol Station");
    assert_eq!(shell.fuel_types, vec!["Petrol", "Diesel", "Premium"]);
    assert!(shell.mechanic_available);
    assert_eq!(shell.unit_price, 105.0);
    assert_eq!(shell.distance_km, 3.5);
}

#[test]
fn test_list_vendors_is_stable() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.list_vendors(), catalog.list_vendors());
    assert_eq!(Catalog::standard(), Catalog::default());
}

#[test]
fn test_find_vendor_missing() {
    let catalog = Catalog::standard();
    assert!(catalog.find_vendor(VendorId(0)).is_none());
    assert!(catalog.find_vendor(VendorId(99)).is_none());
}

#[test]
fn test_find_vendor_returns_first_match() {
    let catalog = Catalog::from_vendors(vec![
        Vendor::new(VendorId(1), "First", &["Petrol"], false, 10.0, 1.0),
        Vendor::new(VendorId(1), "Shadowed", &["Diesel"], false, 20.0, 2.0),
    ]);
    assert_eq!(catalog.find_vendor(VendorId(1)).unwrap().name, "First");
}

#[test]
fn test_compute_total_matches_formula() {
    let catalog = Catalog::standard();
    let vendors = catalog.list_vendors();

    for len in 1..=vendors.len() {
        let cart = &vendors[..len];
        let prices: f64 = cart.iter().map(|v| v.unit_price).sum();
        for discount in [0.0, 5.0, 10.0, 25.0] {
            assert_eq!(compute_total(cart, discount), prices + DELIVERY_CHARGE - discount);
        }
    }
}

#[test]
fn test_compute_total_does_not_clamp() {
    assert_eq!(subtotal(&[]), 0.0);
    assert_eq!(compute_total(&[], 0.0), DELIVERY_CHARGE);
    assert_eq!(compute_total(&[], 30.0), DELIVERY_CHARGE - 30.0);
}

#[test]
fn test_price_breakdown() {
    let catalog = Catalog::standard();
    let cart = vec![
        catalog.find_vendor(VendorId(1)).unwrap().clone(),
        catalog.find_vendor(VendorId(4)).unwrap().clone(),
    ];

    let plain = PriceBreakdown::for_cart(&cart, 0.0);
    assert_eq!(plain.subtotal, 207.0);
    assert_eq!(plain.total, 227.0);
    assert!(!plain.summary().contains("Discount"));

    let discounted = PriceBreakdown::for_cart(&cart, 10.0);
    assert_eq!(discounted.total, 217.0);
    assert!(discounted.summary().contains("Discount: -₹10"));
}

#[test]
fn test_filter_by_service_and_distance() {
    let catalog = Catalog::standard();
    let vendors = catalog.list_vendors();

    let fuel = filter_vendors(vendors, "", 10.0, ServiceType::Fuel);
    assert_eq!(ids(&fuel), vec![1, 2, 4, 5, 6]);

    let mechanic = filter_vendors(vendors, "", 10.0, ServiceType::Mechanic);
    assert_eq!(ids(&mechanic), vec![1, 4, 6]);

    let far = filter_vendors(vendors, "", 20.0, ServiceType::Mechanic);
    assert_eq!(ids(&far), vec![1, 3, 4, 6]);
}

#[test]
fn test_filter_search_is_case_insensitive() {
    let catalog = Catalog::standard();
    let vendors = catalog.list_vendors();

    let found = filter_vendors(vendors, "PETROL", 20.0, ServiceType::Fuel);
    assert_eq!(ids(&found), vec![1, 3, 4, 5]);

    let found = filter_vendors(vendors, "petrol", 10.0, ServiceType::Fuel);
    assert_eq!(ids(&found), vec![1, 4, 5]);

    assert!(filter_vendors(vendors, "nowhere", 20.0, ServiceType::Fuel).is_empty());
}

#[test]
fn test_fuel_tab_requires_a_fuel_type() {
    let vendors = vec![
        Vendor::new(VendorId(1), "Roadside Garage", &[], true, 300.0, 2.0),
        Vendor::new(VendorId(2), "Corner Pump", &["Petrol"], false, 99.0, 2.0),
    ];

    let fuel = filter_vendors(&vendors, "", 5.0, ServiceType::Fuel);
    assert_eq!(ids(&fuel), vec![2]);

    let mechanic = filter_vendors(&vendors, "", 5.0, ServiceType::Mechanic);
    assert_eq!(ids(&mechanic), vec![1]);
}

#[test]
fn test_filter_results_are_ordered_subset() {
    let catalog = Catalog::standard();
    let vendors = catalog.list_vendors();

    for term in ["", "oil", "BUNK", "p"] {
        for max in [1.0, 3.5, 7.2, 10.0, 20.0] {
            for service in [ServiceType::Fuel, ServiceType::Mechanic] {
                let result = filter_vendors(vendors, term, max, service);

                let positions: Vec<usize> = result
                    .iter()
                    .map(|r| vendors.iter().position(|v| v.id == r.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));

                for vendor in result {
                    assert!(vendor.name.to_lowercase().contains(&term.to_lowercase()));
                    assert!(vendor.distance_km <= max);
                    match service {
                        ServiceType::Fuel => assert!(!vendor.fuel_types.is_empty()),
                        ServiceType::Mechanic => assert!(vendor.mechanic_available),
                    }
                }
            }
        }
    }
}

#[test]
fn test_vendor_filter_slider_is_clamped() {
    let mut filter = VendorFilter::new(ServiceType::Mechanic);
    assert_eq!(filter.max_distance_km(), 10.0);

    filter.set_max_distance_km(50.0);
    assert_eq!(filter.max_distance_km(), MAX_DISTANCE_KM);

    filter.set_max_distance_km(0.0);
    assert_eq!(filter.max_distance_km(), MIN_DISTANCE_KM);
    assert!(filter.apply(Catalog::standard().list_vendors()).is_empty());
    assert_eq!(
        filter.empty_message(),
        "No mechanics found. Try adjusting your filters."
    );
}
