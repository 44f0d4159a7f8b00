//! Drawing surfaces the view renders into.
//!
//! Surfaces are declared once in a [`SurfaceRegistry`] and resolved into typed
//! references when the view is built. Renderers receive those references
//! explicitly; nothing is looked up by name while rendering.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::error::RenderError;
use crate::ui::article_list::ArticleListItem;
use crate::ui::config::UI_CONFIG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Chart,
    List,
}

impl SurfaceKind {
    fn name(&self) -> &'static str {
        match self {
            SurfaceKind::Chart => "chart",
            SurfaceKind::List => "list",
        }
    }
}

/// Known surfaces by id.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, SurfaceKind>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chart canvas and article container the dashboard lays out.
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(UI_CONFIG.surfaces.chart, SurfaceKind::Chart);
        registry.register(UI_CONFIG.surfaces.articles, SurfaceKind::List);
        registry
    }

    pub fn register(&mut self, id: impl Into<String>, kind: SurfaceKind) {
        self.surfaces.insert(id.into(), kind);
    }

    fn resolve(&self, id: &str, expected: SurfaceKind) -> Result<(), RenderError> {
        match self.surfaces.get(id) {
            None => Err(RenderError::MissingSurface(id.to_string())),
            Some(&kind) if kind != expected => Err(RenderError::WrongSurfaceKind {
                id: id.to_string(),
                expected: expected.name(),
                found: kind.name(),
            }),
            Some(_) => Ok(()),
        }
    }

    pub fn chart_surface(&self, id: &str) -> Result<ChartSurface, RenderError> {
        self.resolve(id, SurfaceKind::Chart)?;
        Ok(ChartSurface::new(id))
    }

    pub fn list_surface(&self, id: &str) -> Result<ListSurface, RenderError> {
        self.resolve(id, SurfaceKind::List)?;
        Ok(ListSurface::new(id))
    }
}

/// Typed handle to a chart canvas. Tracks how many chart instances are bound to it.
#[derive(Debug, Clone)]
pub struct ChartSurface {
    id: String,
    live: Arc<AtomicUsize>,
    generation: Arc<AtomicU64>,
}

impl ChartSurface {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            live: Arc::new(AtomicUsize::new(0)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Chart instances currently holding a lease on this surface.
    pub fn live_instances(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Charts created on this surface so far.
    pub fn generations(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub(crate) fn acquire(&self) -> SurfaceLease {
        self.live.fetch_add(1, Ordering::SeqCst);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SurfaceLease {
            live: Arc::clone(&self.live),
            generation,
        }
    }
}

/// Held by a live chart. Dropping it releases the surface.
#[derive(Debug)]
pub struct SurfaceLease {
    live: Arc<AtomicUsize>,
    generation: u64,
}

impl SurfaceLease {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for SurfaceLease {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Typed handle to the article list container.
#[derive(Debug, Clone, Default)]
pub struct ListSurface {
    id: String,
    items: Vec<ArticleListItem>,
}

impl ListSurface {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, item: ArticleListItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ArticleListItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
