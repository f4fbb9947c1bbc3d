use serde::Deserialize;

use calfeed_core::calendar::Company;

/// Request payload for creating a new company.
#[derive(Debug, Deserialize)]
pub struct CreateCompany {
    pub id: String,
    pub name: String,
}

impl CreateCompany {
    /// Converts the create request into a Company.
    pub fn into_company(self) -> Company {
        Company::new(self.id.trim(), self.name.trim())
    }
}

/// Request payload for renaming a company.
#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
}

impl UpdateCompany {
    /// Applies the update to an existing company.
    pub fn apply_to(self, company: &mut Company) {
        company.name = self.name.trim().to_string();
    }
}
