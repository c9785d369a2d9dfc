// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Asset layout configuration: where templates, fonts, and the placeholder
// photo live, and where batch output goes by default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{BackCover, DocumentKind, TemplateRef};

/// Filesystem layout of the assets Cardpress reads.
///
/// Relative directories are resolved against `root`. Defaults follow the
/// conventional `templates/`, `fonts/`, `profiles/` layout in the working
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetLayout {
    /// Base directory for every relative path below.
    pub root: PathBuf,
    /// Directory holding named template images.
    pub templates_dir: PathBuf,
    /// Bold TrueType font used for names.
    pub font_path: PathBuf,
    /// Photo used when a record has no photo.
    pub placeholder_photo: PathBuf,
    /// Back cover appended to ID cards classified as light.
    pub back_cover_light: String,
    /// Back cover appended to ID cards classified as dark.
    pub back_cover_dark: String,
    /// Batch output directory for ID cards when none is given.
    pub id_output_dir: PathBuf,
    /// Batch output directory for certificates when none is given.
    pub certificate_output_dir: PathBuf,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            templates_dir: PathBuf::from("templates"),
            font_path: PathBuf::from("fonts/Helvetica-Bold.ttf"),
            placeholder_photo: PathBuf::from("profiles/unknown.jpeg"),
            back_cover_light: "back-light.png".into(),
            back_cover_dark: "back-dark.png".into(),
            id_output_dir: PathBuf::from("ids"),
            certificate_output_dir: PathBuf::from("certificates"),
        }
    }
}

impl AssetLayout {
    /// Default layout rooted at `root`.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load a layout from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let layout = serde_json::from_str(&data)?;
        Ok(layout)
    }

    /// Write the layout as pretty-printed JSON.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    fn under_root(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.under_root(&self.templates_dir)
    }

    pub fn font_path(&self) -> PathBuf {
        self.under_root(&self.font_path)
    }

    pub fn placeholder_photo(&self) -> PathBuf {
        self.under_root(&self.placeholder_photo)
    }

    /// Resolve a template reference to a file.
    ///
    /// An existing file path is used as-is. Anything else is looked up in the
    /// templates directory, with `.png` appended when the name carries no
    /// extension.
    pub fn template_path(&self, template: &TemplateRef) -> PathBuf {
        let direct = Path::new(template.as_str());
        if direct.is_file() {
            return direct.to_path_buf();
        }
        let file_name = if direct.extension().is_some() {
            template.as_str().to_owned()
        } else {
            format!("{}.png", template.as_str())
        };
        self.templates_dir().join(file_name)
    }

    /// Back-cover image for the given classification.
    pub fn back_cover_path(&self, back_cover: BackCover) -> PathBuf {
        let file_name = match back_cover {
            BackCover::Light => &self.back_cover_light,
            BackCover::Dark => &self.back_cover_dark,
        };
        self.templates_dir().join(file_name)
    }

    /// Batch output directory used when the caller gives none.
    pub fn default_output_dir(&self, kind: DocumentKind) -> PathBuf {
        match kind {
            DocumentKind::IdCard => self.id_output_dir.clone(),
            DocumentKind::Certificate => self.certificate_output_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_directory_convention() {
        let layout = AssetLayout::default();
        assert_eq!(layout.font_path(), PathBuf::from("./fonts/Helvetica-Bold.ttf"));
        assert_eq!(layout.placeholder_photo(), PathBuf::from("./profiles/unknown.jpeg"));
        assert_eq!(layout.default_output_dir(DocumentKind::IdCard), PathBuf::from("ids"));
    }

    #[test]
    fn output_dirs_stay_relative_to_working_directory() {
        let layout = AssetLayout::rooted_at("/srv/cards");
        assert_eq!(layout.default_output_dir(DocumentKind::IdCard), PathBuf::from("ids"));
        assert_eq!(
            layout.default_output_dir(DocumentKind::Certificate),
            PathBuf::from("certificates")
        );
        assert!(layout.templates_dir().starts_with("/srv/cards"));
    }

    #[test]
    fn bare_template_name_resolves_into_templates_dir() {
        let layout = AssetLayout::rooted_at("/srv/cards");
        assert_eq!(
            layout.template_path(&TemplateRef::new("volunteer")),
            PathBuf::from("/srv/cards/templates/volunteer.png")
        );
        assert_eq!(
            layout.template_path(&TemplateRef::new("volunteer.jpg")),
            PathBuf::from("/srv/cards/templates/volunteer.jpg")
        );
    }

    #[test]
    fn existing_template_path_is_used_directly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("front.png");
        std::fs::write(&file, b"not decoded here").unwrap();

        let layout = AssetLayout::rooted_at("/elsewhere");
        let reference = TemplateRef::new(file.to_string_lossy());
        assert_eq!(layout.template_path(&reference), file);
    }

    #[test]
    fn back_covers_live_in_templates_dir() {
        let layout = AssetLayout::rooted_at("assets");
        assert_eq!(
            layout.back_cover_path(BackCover::Dark),
            PathBuf::from("assets/templates/back-dark.png")
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "font_path": "fonts/Custom.ttf" }"#).unwrap();

        let layout = AssetLayout::load(&path).unwrap();
        assert_eq!(layout.font_path, PathBuf::from("fonts/Custom.ttf"));
        assert_eq!(layout.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn persist_then_load_preserves_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        let layout = AssetLayout::rooted_at("/data/cards");
        layout.persist(&path).unwrap();
        assert_eq!(AssetLayout::load(&path).unwrap(), layout);
    }
}
