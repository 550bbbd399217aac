mod checksum_priority;
mod license_priority;

pub use checksum_priority::ChecksumPriority;
pub use license_priority::LicensePriority;
