//! The fixed livelihood job catalog reinstated on every startup.

/// Titles that never belong in the catalog.
pub const EXCLUDED_TITLES: [&str; 6] = [
    "Software Developer",
    "Data Analyst",
    "Project Manager",
    "UI/UX Designer",
    "Database Administrator",
    "Network Engineer",
];

/// Jobs paying more than this are outside the program's scope.
pub const SALARY_CEILING: f64 = 50_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogJob {
    pub title: &'static str,
    pub description: &'static str,
    pub salary: f64,
}

pub const LIVELIHOOD_JOBS: [CatalogJob; 10] = [
    CatalogJob {
        title: "Construction Worker",
        description: "General construction work including building, renovation, and maintenance tasks. No experience required, training provided. Helps provide stable income for families.",
        salary: 25_000.0,
    },
    CatalogJob {
        title: "Farm Laborer",
        description: "Agricultural work including planting, harvesting, and farm maintenance. Suitable for rural communities. Provides livelihood opportunities in agriculture sector.",
        salary: 20_000.0,
    },
    CatalogJob {
        title: "Food Service Worker",
        description: "Work in restaurants, cafes, or food preparation areas. Entry-level position with on-the-job training. Helps individuals gain work experience and earn income.",
        salary: 22_000.0,
    },
    CatalogJob {
        title: "Housekeeping Staff",
        description: "Cleaning and maintenance work in hotels, offices, or residential areas. Flexible schedule available. Provides employment opportunities for those seeking stable work.",
        salary: 20_000.0,
    },
    CatalogJob {
        title: "Security Guard",
        description: "Provide security services and monitor premises. Training provided. Offers stable employment with regular income to support families.",
        salary: 23_000.0,
    },
    CatalogJob {
        title: "Delivery Driver",
        description: "Deliver goods and packages to customers. Own vehicle preferred but not required. Flexible work schedule. Helps individuals earn income through delivery services.",
        salary: 22_000.0,
    },
    CatalogJob {
        title: "Street Vendor Assistant",
        description: "Assist in street vending operations, selling goods in markets or streets. Learn business skills while earning income. Suitable for those starting their livelihood journey.",
        salary: 18_000.0,
    },
    CatalogJob {
        title: "Warehouse Worker",
        description: "Handle inventory, packing, and shipping in warehouse facilities. Physical work, no prior experience needed. Provides employment for able-bodied individuals seeking work.",
        salary: 21_000.0,
    },
    CatalogJob {
        title: "Caregiver",
        description: "Provide care and assistance to elderly or persons with disabilities. Compassionate work that helps others while earning income. Training and support provided.",
        salary: 24_000.0,
    },
    CatalogJob {
        title: "Laundry Worker",
        description: "Operate laundry machines, fold clothes, and manage laundry services. Simple tasks, suitable for various skill levels. Provides steady employment opportunity.",
        salary: 19_000.0,
    },
];

/// Whether a posting is admissible under the catalog policy.
pub fn is_admissible(title: &str, salary: f64) -> bool {
    salary <= SALARY_CEILING && !EXCLUDED_TITLES.iter().any(|t| t.eq_ignore_ascii_case(title.trim()))
}
