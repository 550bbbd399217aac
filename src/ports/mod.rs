/// Ports module defining interfaces for hexagonal architecture
///
/// The outbound ports cover both infrastructure (graph input, output,
/// progress) and the ecosystem capabilities the projection relies on.
pub mod outbound;
