//! Mappers from domain records to the display DTOs in `shared`.

pub mod donor_mapper;
pub mod organization_mapper;
pub mod recipient_mapper;
pub mod staff_mapper;

pub use donor_mapper::DonorMapper;
pub use organization_mapper::OrganizationMapper;
pub use recipient_mapper::RecipientMapper;
pub use staff_mapper::StaffMapper;
