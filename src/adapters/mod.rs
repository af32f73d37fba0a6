// Adapters layer: concrete implementations of the domain ports for external
// systems (filesystem assets, http assets, connectivity probes).

pub mod assets;
pub mod connectivity;
