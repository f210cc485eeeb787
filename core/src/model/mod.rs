pub mod aggregate;
pub mod archetype;
pub mod classification;
pub mod set_record;
