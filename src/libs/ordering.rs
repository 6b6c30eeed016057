//! Organizational-chart ordering of report rows.
//!
//! Report tables follow the company's org chart rather than alphabetical
//! order: rows are ranked by department, then by designation within the
//! department, then by name. Departments and designations missing from the
//! chart rank after every listed one.
//!
//! The built-in chart can be replaced through the `ordering` section of the
//! configuration file.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Default department order.
pub const DEFAULT_DEPARTMENT_ORDER: [&str; 20] = [
    "Management",
    "Construction",
    "Project Management",
    "Planning & Design (Architectural)",
    "Planning & Design (Structural)",
    "Electro-Mechanical",
    "Inventory Mgt.",
    "Inventory Mgt. (Project Side)",
    "Internal Audit",
    "Accounts & Finance",
    "Brand Management",
    "Sales & Marketing",
    "Customer Relations",
    "Land Procurement",
    "Legal",
    "HR & Admin",
    "HR & Admin (Security)",
    "Information Technology (IT)",
    "Management Information System (MIS)",
    "Material Quality Assurance & Purchase",
];

const CONSTRUCTION_DESIGNATIONS: [&str; 12] = [
    "General Manager",
    "Deputy General Manager",
    "Assistant General Manager",
    "Senior Manager",
    "Manager",
    "Deputy Manager",
    "Assistant Manager",
    "Senior Executive",
    "Executive",
    "Site Engineer",
    "Assistant Site Engineer",
    "Site Supervisor",
];

const INVENTORY_DESIGNATIONS: [&str; 5] = [
    "Manager",
    "Deputy Manager",
    "Assistant Manager",
    "Assistant Project Accountant (CH)",
    "Site Accountant (CH)",
];

const INVENTORY_PROJECT_SIDE_DESIGNATIONS: [&str; 3] = ["Assistant Project Accountant (CH)", "Site Accountant (CH)", "Store Keeper"];

const SECURITY_DESIGNATIONS: [&str; 4] = ["Security Officer", "Security Supervisor", "Senior Security Guard", "Security Guard"];

/// A row that can be placed on the org chart.
pub trait OrgRanked {
    fn department(&self) -> &str;
    fn designation(&self) -> &str {
        ""
    }
    fn name(&self) -> &str;
}

/// Department order plus a designation order per department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgOrder {
    pub departments: Vec<String>,
    #[serde(default)]
    pub designations: BTreeMap<String, Vec<String>>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for OrgOrder {
    fn default() -> Self {
        let mut designations = BTreeMap::new();
        designations.insert("Construction".to_string(), owned(&CONSTRUCTION_DESIGNATIONS));
        designations.insert("Inventory Mgt.".to_string(), owned(&INVENTORY_DESIGNATIONS));
        designations.insert(
            "Inventory Mgt. (Project Side)".to_string(),
            owned(&INVENTORY_PROJECT_SIDE_DESIGNATIONS),
        );
        designations.insert("HR & Admin (Security)".to_string(), owned(&SECURITY_DESIGNATIONS));

        OrgOrder {
            departments: owned(&DEFAULT_DEPARTMENT_ORDER),
            designations,
        }
    }
}

impl OrgOrder {
    /// Position of the department in the chart; `None` when unlisted.
    pub fn department_rank(&self, department: &str) -> Option<usize> {
        self.departments.iter().position(|d| d == department)
    }

    /// Position of the designation within its department; `None` when
    /// either is unlisted.
    pub fn designation_rank(&self, department: &str, designation: &str) -> Option<usize> {
        self.designations
            .get(department)
            .and_then(|list| list.iter().position(|d| d == designation))
    }

    /// Compares two rows by department, designation and name.
    pub fn compare<T: OrgRanked>(&self, a: &T, b: &T) -> Ordering {
        let dept_a = rank_key(self.department_rank(a.department()));
        let dept_b = rank_key(self.department_rank(b.department()));
        let desig_a = rank_key(self.designation_rank(a.department(), a.designation()));
        let desig_b = rank_key(self.designation_rank(b.department(), b.designation()));

        dept_a
            .cmp(&dept_b)
            .then(desig_a.cmp(&desig_b))
            .then_with(|| a.name().cmp(b.name()))
    }
}

// Unlisted entries rank after every listed one.
fn rank_key(rank: Option<usize>) -> usize {
    rank.unwrap_or(usize::MAX)
}

/// Returns the rows in org-chart order.
///
/// The sort is stable, so rows equal on every key keep their input order.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::ordering::{sort_rows, OrgOrder, OrgRanked};
///
/// struct Row(&'static str, &'static str);
/// impl OrgRanked for Row {
///     fn department(&self) -> &str { self.0 }
///     fn name(&self) -> &str { self.1 }
/// }
///
/// let rows = vec![Row("Unknown Dept", "A"), Row("Construction", "B")];
/// let sorted = sort_rows(rows, &OrgOrder::default());
/// assert_eq!(sorted[0].0, "Construction");
/// ```
pub fn sort_rows<T: OrgRanked>(mut rows: Vec<T>, order: &OrgOrder) -> Vec<T> {
    rows.sort_by(|a, b| order.compare(a, b));
    rows
}
