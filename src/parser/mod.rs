pub mod markers;
pub mod declaration;
pub mod definitions;
