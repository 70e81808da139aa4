use blog_core_api::dto::AddressDto;
use serde::{Deserialize, Serialize};

use super::audit_stamp::AuditStamp;
use super::persistable::Persistable;

/// Internal record for a postal address. Referenced by [`super::Person`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub audit: AuditStamp,
    pub address_line_1: String,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub city: String,
    pub country: Option<String>,
    pub zip_code: String,
}

impl Persistable for Address {
    fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self {
        Address {
            audit: f(self.audit),
            ..self
        }
    }
}

impl Address {
    pub fn to_dto(&self) -> AddressDto {
        AddressDto {
            persistent: self.audit.to_dto(),
            address_line_1: self.address_line_1.clone(),
            address_line_2: self.address_line_2.clone(),
            address_line_3: self.address_line_3.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            zip_code: self.zip_code.clone(),
        }
    }

    pub fn from_dto(dto: &AddressDto) -> Self {
        Address {
            audit: AuditStamp::from_dto(&dto.persistent),
            address_line_1: dto.address_line_1.clone(),
            address_line_2: dto.address_line_2.clone(),
            address_line_3: dto.address_line_3.clone(),
            city: dto.city.clone(),
            country: dto.country.clone(),
            zip_code: dto.zip_code.clone(),
        }
    }
}
