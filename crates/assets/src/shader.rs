use crate::AssetError;
use std::path::Path;

/// WGSL source pair: a vertex module exporting `vs_main` and a fragment
/// module exporting `fs_main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    pub fn load(vertex: impl AsRef<Path>, fragment: impl AsRef<Path>) -> Result<Self, AssetError> {
        let sources = Self {
            vertex: read_source(vertex.as_ref())?,
            fragment: read_source(fragment.as_ref())?,
        };
        tracing::info!(
            "loaded shader pair {} + {}",
            vertex.as_ref().display(),
            fragment.as_ref().display()
        );
        Ok(sources)
    }
}

fn read_source(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let vs = dir.path().join("body.vert.wgsl");
        let fs = dir.path().join("body.frag.wgsl");
        std::fs::write(&vs, "// vertex").unwrap();
        std::fs::write(&fs, "// fragment").unwrap();

        let sources = ShaderSources::load(&vs, &fs).unwrap();
        assert_eq!(sources, ShaderSources::new("// vertex", "// fragment"));
    }

    #[test]
    fn missing_fragment_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let vs = dir.path().join("body.vert.wgsl");
        std::fs::write(&vs, "// vertex").unwrap();

        let err = ShaderSources::load(&vs, dir.path().join("missing.wgsl")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("missing.wgsl"));
    }
}
