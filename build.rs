use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/plants.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let plants = catalog.get("plants").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'plants' field\n\
             The catalog must have a top-level 'plants' array.\n"
        );
    });

    let plants = plants.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'plants' must be an array\n\
             Got: {plants}\n"
        );
    });

    validate_plants(plants);

    println!(
        "cargo:warning=Validated catalog: {} plants",
        plants.len()
    );
}

fn validate_plants(plants: &[serde_json::Value]) {
    let mut seen = HashSet::new();

    for (i, plant) in plants.iter().enumerate() {
        let plant_id = plant
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Plant at index {i} missing string 'id' field\n")
            });

        assert!(
            seen.insert(plant_id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate plant id '{plant_id}' (index {i})\n"
        );

        for field in ["name", "botanicalName", "description", "sun", "height", "color"] {
            assert!(
                plant.get(field).and_then(|v| v.as_str()).is_some(),
                "\n\nCATALOG BUILD ERROR: Plant '{plant_id}' (index {i}) missing '{field}' field\n"
            );
        }

        let bloom_len = plant
            .get("bloom")
            .and_then(|b| b.as_array())
            .map_or(0, Vec::len);
        assert!(
            bloom_len > 0,
            "\n\nCATALOG BUILD ERROR: Plant '{plant_id}' has no bloom seasons\n\
             Every plant must bloom in at least one season.\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/plants.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
