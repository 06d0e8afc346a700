pub mod address;
pub mod contact;
pub mod email;
pub mod field;
pub mod ids;
pub mod phone;
pub mod photo;
pub mod social;

pub use address::{Address, AddressKind};
pub use contact::ContactRecord;
pub use email::is_valid_email;
pub use field::{default_descriptors, descriptor_for, FieldDescriptor, FieldKind, WORK_FIELDS};
pub use ids::FieldId;
pub use phone::is_valid_phone;
pub use photo::{Photo, PhotoFile};
pub use social::{is_profile_link, profile_url_for, SocialHandles, SocialPlatform};
