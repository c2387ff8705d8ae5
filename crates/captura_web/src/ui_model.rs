//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! acquisition-surface inventory on the host.

/// The two acquisition surfaces. Both stay visible; by convention only one
/// holds the current image at a time (the session enforces that).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Drop,
    Camera,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Drop => "drop",
            SourceKind::Camera => "camera",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SourceKind::Drop => "Archivo",
            SourceKind::Camera => "Cámara",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SourceKind::Drop => "🖼️",
            SourceKind::Camera => "📷",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            SourceKind::Drop => {
                "Arrastra y suelta una imagen aquí o haz clic para seleccionar una"
            }
            SourceKind::Camera => "Captura una foto con la cámara de tu equipo",
        }
    }

    pub fn all() -> &'static [SourceKind] {
        &[SourceKind::Drop, SourceKind::Camera]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_inventory_is_stable() {
        let all = SourceKind::all();
        assert_eq!(all.len(), 2);

        let mut labels: Vec<&'static str> = all.iter().copied().map(SourceKind::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 2);

        for k in all {
            assert!(!k.label().trim().is_empty());
            assert!(!k.display_name().trim().is_empty());
            assert!(!k.icon().trim().is_empty());
            assert!(!k.hint().trim().is_empty());
        }
    }
}
