pub mod extract;
pub mod normalize;
pub mod path;
pub mod record;
pub mod sections;
