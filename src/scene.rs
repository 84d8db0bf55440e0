//! Scene - an ordered list of drawables on a fixed-size canvas
//!
//! Items are painted in insertion order, so later items cover earlier ones.
//! A scene only grows; nothing is ever removed or edited once added.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use svg::Document;
use svg::node::element::Group;

use crate::defaults;
use crate::errors::{GeometryError, SceneError};
use crate::log::{debug, info, warn};
use crate::markup::{self, LEGACY_FOOTER, RenderOptions, XML_DECLARATION};
use crate::shapes::{Drawable, Render};

/// External program used to look at a written scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub command: String,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(defaults::VIEWER)
    }
}

impl Viewer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Launch the viewer on `path` without waiting for it.
    ///
    /// The exit status is never looked at. A viewer that cannot be started
    /// is logged and otherwise ignored.
    pub fn open(&self, path: &Path) {
        let spawned = Command::new(&self.command)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(_child) => {
                info!(viewer = %self.command, pid = _child.id(), path = %path.display(), "opened viewer");
            }
            Err(_e) => {
                warn!(viewer = %self.command, error = %_e, "could not start viewer");
            }
        }
    }
}

/// A canvas plus everything painted on it
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    width: u32,
    height: u32,
    items: Vec<Drawable>,
    options: RenderOptions,
    /// Where `write_svg` last put the document
    svg_path: Option<PathBuf>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: defaults::SCENE_NAME.to_string(),
            width: defaults::SCENE_WIDTH,
            height: defaults::SCENE_HEIGHT,
            items: Vec::new(),
            options: RenderOptions::default(),
            svg_path: None,
        }
    }
}

impl Scene {
    /// An empty scene. `name` is also the stem of the default output file.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyCanvas { width, height });
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            ..Self::default()
        })
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn items(&self) -> &[Drawable] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a drawable on top of everything already in the scene
    pub fn add(&mut self, item: impl Into<Drawable>) {
        let item = item.into();
        debug!(scene = %self.name, kind = item.kind(), count = self.items.len() + 1, "add");
        self.items.push(item);
    }

    /// The complete SVG document. Pure: the same scene always gives the
    /// same bytes.
    pub fn serialize(&self) -> String {
        if self.options.legacy_layout {
            return self.legacy_markup();
        }
        format!("{XML_DECLARATION}{}", self.document())
    }

    /// The scene as an `svg` document tree, items in insertion order
    pub fn document(&self) -> Document {
        let group = self
            .items
            .iter()
            .flat_map(|item| item.nodes(&self.options))
            .fold(Group::new(), |group, node| group.add(node));
        markup::document(self.width, self.height, group)
    }

    fn legacy_markup(&self) -> String {
        let mut out = markup::legacy_header(self.width, self.height);
        for item in &self.items {
            for fragment in item.legacy_fragments(&self.options) {
                out.push_str(&fragment);
            }
        }
        out.push_str(LEGACY_FOOTER);
        out
    }

    /// `<name>.svg` in the working directory
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.svg", self.name))
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), SceneError> {
        let io_err = |source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        if self.options.legacy_layout {
            writer.write_all(self.legacy_markup().as_bytes()).map_err(io_err)?;
        } else {
            writer.write_all(XML_DECLARATION.as_bytes()).map_err(io_err)?;
            svg::write(&mut writer, &self.document()).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        info!(path = %path.display(), items = self.items.len(), legacy = self.options.legacy_layout, "wrote svg");
        Ok(())
    }

    /// Write to `path`, or to [`default_path`](Self::default_path) when none
    /// is given, and remember the location for [`display`](Self::display).
    pub fn write_svg(&mut self, path: Option<&Path>) -> Result<&Path, SceneError> {
        let path = path.map_or_else(|| self.default_path(), Path::to_path_buf);
        self.write_to(&path)?;
        Ok(self.svg_path.insert(path).as_path())
    }

    /// The file most recently written by [`write_svg`](Self::write_svg)
    pub fn svg_path(&self) -> Option<&Path> {
        self.svg_path.as_deref()
    }

    /// Open the last written file in `viewer`. Best effort: only fails if
    /// nothing has been written yet.
    pub fn display(&self, viewer: &Viewer) -> Result<(), SceneError> {
        let path = self.svg_path().ok_or(SceneError::NotWritten)?;
        viewer.open(path);
        Ok(())
    }
}
