//! Informational text shown beside the map.

use crate::geometry::BlockPos;

/// Biome found at a block by the host's biome source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeSample {
    pub id: i32,
    pub name: Option<String>,
}

/// `"(x, z): NAME with ID n (0xHEX)"`.
pub fn coordinate_label(pos: BlockPos, biome: &BiomeSample) -> String {
    let name = biome
        .name
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_else(|| "UNKNOWN".to_string());
    format!(
        "({}, {}): {} with ID {} (0x{:X})",
        pos.x, pos.z, name, biome.id, biome.id
    )
}

/// Layer selector entry, e.g. `"[3] VoronoiLayer 1:1"`.
pub fn layer_label(index: usize, name: &str, scale: u32) -> String {
    format!("[{index}] {name} {scale}:1")
}
