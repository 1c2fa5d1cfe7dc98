// Mappers module - cartridge mapper implementations and the factory
//
// Each mapper handles memory banking for one cartridge board family. The
// factory turns a parsed cartridge into the mapper the header names.

mod mapper0;

use super::{Cartridge, Mapper};
use mapper0::Mapper0;

/// Error type for mapper creation
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "mapper {} is not supported", num)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create a mapper instance for the given cartridge
///
/// The mapper number comes from the iNES header. Takes ownership of the
/// cartridge ROM data.
///
/// # Errors
///
/// Returns `MapperError::UnsupportedMapper` for mapper numbers this crate
/// does not implement.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        mapper_num => Err(MapperError::UnsupportedMapper(mapper_num)),
    }
}
