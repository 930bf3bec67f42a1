// Ingestion caps for catalog payloads coming from an untrusted endpoint

pub const MAX_PROVINCES: usize = 1_000;
pub const MAX_REGENCIES: usize = 50_000;
pub const MAX_DISTRICTS: usize = 500_000;

// Bytes, not chars
pub const MAX_NAME_LEN: usize = 256;

#[inline]
pub fn name_in_bounds(name: &str) -> bool { name.len() <= MAX_NAME_LEN }
