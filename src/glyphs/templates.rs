use crate::error::{PageError, Result};
use crate::image::io::{load_grayscale_image, GrayImageU8};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Labelled grayscale template (a glyph or an actor).
#[derive(Clone, Debug)]
pub struct Template {
    pub label: String,
    pub image: GrayImageU8,
}

impl Template {
    pub fn new(label: impl Into<String>, image: GrayImageU8) -> Self {
        Self {
            label: label.into(),
            image,
        }
    }

    /// The character this template prints, when the label is one character.
    pub fn glyph_char(&self) -> Option<char> {
        let mut chars = self.label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Templates loaded once per run and shared by reference with the stages
/// that need them.
#[derive(Clone, Debug, Default)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Load every `*.png` in `dir`. Labels come from the file stem up to the
    /// first `.`; the stem `dot` stands for `.`. Files are read in name
    /// order so template order (and hence glyph numbering) is stable.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PageError::Template {
                path: dir.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }
        let entries = fs::read_dir(dir).map_err(|source| PageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| PageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "png") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut templates = Vec::with_capacity(paths.len());
        for path in paths {
            let label = label_from_path(&path);
            let image = load_grayscale_image(&path)?;
            debug!(
                "template {:?} {}x{} from {}",
                label,
                image.width(),
                image.height(),
                path.display()
            );
            templates.push(Template::new(label, image));
        }
        info!("loaded {} templates from {}", templates.len(), dir.display());
        Ok(Self { templates })
    }

    /// Like [`TemplateSet::load_dir`] but every label must be a single
    /// character.
    pub fn load_glyphs(dir: &Path) -> Result<Self> {
        let set = Self::load_dir(dir)?;
        if let Some(bad) = set.iter().find(|t| t.glyph_char().is_none()) {
            return Err(PageError::Template {
                path: dir.to_path_buf(),
                reason: format!("glyph label {:?} is not a single character", bad.label),
            });
        }
        Ok(set)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn as_slice(&self) -> &[Template] {
        &self.templates
    }
}

fn label_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let label = stem.split('.').next().unwrap_or_default();
    if label == "dot" {
        ".".to_string()
    } else {
        label.to_string()
    }
}
