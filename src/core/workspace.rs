// PDK Manager - core/workspace.rs
//
// Path layout of a managed workspace. Pure path arithmetic: nothing here
// touches the filesystem.

use crate::core::model::EditableFile;
use crate::util::constants;
use crate::util::error::WorkspaceError;
use std::path::{Component, Path, PathBuf};

/// The directory tree the application manages.
///
/// ```text
/// <root>/platforms/<pdk>/<file>           editable platform files
/// <root>/platforms/<pdk>/<design>/        imported design + templates
/// <root>/designs/src/<design>/            imported design
/// <root>/default{Config,Constraints,Makefile}.txt
/// <root>/Makefile
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn platforms_dir(&self) -> PathBuf {
        self.root.join(constants::PLATFORMS_DIR)
    }

    pub fn pdk_dir(&self, pdk: &str) -> PathBuf {
        self.platforms_dir().join(pdk)
    }

    /// Copy of the design inside the platform tree.
    pub fn design_pdk_dir(&self, pdk: &str, design: &str) -> PathBuf {
        self.pdk_dir(pdk).join(design)
    }

    /// Copy of the design inside the source tree.
    pub fn design_src_dir(&self, design: &str) -> PathBuf {
        self.root.join(constants::DESIGNS_SRC_DIR).join(design)
    }

    /// Platform-level file opened by the edit pane.
    pub fn editable_path(&self, pdk: &str, file: EditableFile) -> PathBuf {
        self.pdk_dir(pdk).join(file.file_name())
    }

    pub fn template_path(&self, file: EditableFile) -> PathBuf {
        self.root.join(file.template_name())
    }

    pub fn makefile_template_path(&self) -> PathBuf {
        self.root.join(constants::DEFAULT_MAKEFILE_TEMPLATE)
    }

    pub fn makefile_path(&self) -> PathBuf {
        self.root.join(constants::MAKEFILE_NAME)
    }
}

/// Design name for a chosen folder: its final path component.
///
/// Trailing separators are ignored (`/tmp/gcd/` gives `gcd`). Paths whose
/// last component is not a normal name (`/`, `..`) are rejected so the name
/// can never escape the destination trees.
pub fn design_name(source: &Path) -> Result<String, WorkspaceError> {
    match source.components().next_back() {
        Some(Component::Normal(name)) => name
            .to_str()
            .filter(|n| !n.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| WorkspaceError::InvalidDesignName {
                path: source.to_path_buf(),
            }),
        _ => Err(WorkspaceError::InvalidDesignName {
            path: source.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let ws = Workspace::new("/flow");
        assert_eq!(ws.platforms_dir(), PathBuf::from("/flow/platforms"));
        assert_eq!(
            ws.design_pdk_dir("sky130hd", "gcd"),
            PathBuf::from("/flow/platforms/sky130hd/gcd")
        );
        assert_eq!(
            ws.design_src_dir("gcd"),
            PathBuf::from("/flow/designs/src/gcd")
        );
        assert_eq!(
            ws.editable_path("nangate45", EditableFile::ConstraintsSdk),
            PathBuf::from("/flow/platforms/nangate45/constraints.sdk")
        );
        assert_eq!(
            ws.template_path(EditableFile::ConfigMk),
            PathBuf::from("/flow/defaultConfig.txt")
        );
        assert_eq!(ws.makefile_path(), PathBuf::from("/flow/Makefile"));
        assert_eq!(
            ws.makefile_template_path(),
            PathBuf::from("/flow/defaultMakefile.txt")
        );
    }

    #[test]
    fn test_design_name_is_last_component() {
        assert_eq!(design_name(Path::new("/home/u/designs/aes")).unwrap(), "aes");
        assert_eq!(design_name(Path::new("/home/u/designs/aes/")).unwrap(), "aes");
        assert_eq!(design_name(Path::new("riscv32i")).unwrap(), "riscv32i");
    }

    #[test]
    fn test_design_name_rejects_root_and_parent() {
        assert!(matches!(
            design_name(Path::new("/")),
            Err(WorkspaceError::InvalidDesignName { .. })
        ));
        assert!(matches!(
            design_name(Path::new("designs/..")),
            Err(WorkspaceError::InvalidDesignName { .. })
        ));
        assert!(design_name(Path::new("")).is_err());
    }
}
