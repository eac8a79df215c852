pub mod edit;
pub mod part;
pub mod store;
pub mod symmetry;
